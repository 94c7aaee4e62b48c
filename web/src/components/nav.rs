//! Top navigation bar component.

use leptos::prelude::*;
use leptos_router::components::A;

use isocert_common::routes;

/// Site-wide navigation bar.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-brand">
                <A href=routes::HOME attr:class="nav-logo">"ISO Certification & Training"</A>
            </div>
            <div class="nav-links">
                <A href=routes::TRAINING attr:class="nav-link">"Training"</A>
                <A href=routes::FRANCHISE attr:class="nav-link">"Franchise"</A>
                <A href=routes::RESOURCES attr:class="nav-link">"Resources"</A>
                <A href=routes::CONTACT attr:class="nav-link">"Contact"</A>
            </div>
        </nav>
    }
}
