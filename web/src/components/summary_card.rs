//! Count card shown above the dashboard tabs.

use leptos::prelude::*;

use isocert_common::dashboard::StatCard;

#[component]
pub fn SummaryCard(card: StatCard) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{card.label}</p>
            <p class="stat-value">{card.count}</p>
        </div>
    }
}
