//! Admin dashboard – lead counts and tabbed tables of enquiries,
//! registrations and franchise applications.
//!
//! Everything here runs in the browser after hydration: the session lives in
//! local storage, so the server renders nothing for this route.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use isocert_common::api::Fetched;
use isocert_common::dashboard::{settle, DashboardData, Settled, Tab};
use isocert_common::notice::Notice;
use isocert_common::routes;
use isocert_common::session::{check_admin_access, Access, Session};

use crate::components::record_table::{EnquiryTable, FranchiseTable, RegistrationTable};
use crate::components::summary_card::SummaryCard;
use crate::components::toaster::use_toaster;
use crate::pages::fetched;
use crate::storage::BrowserStore;

// ─── Server function ─────────────────────────────────────────────────────────

/// Load all three collections with the admin's bearer token.
#[server(name = FetchDashboard, prefix = "/api")]
pub async fn fetch_dashboard(token: String) -> Result<Fetched<DashboardData>, ServerFnError> {
    let state = crate::app::app_state()?;
    Ok(isocert_common::dashboard::load_dashboard(&*state.backend, &token).await)
}

// ─── Page component ──────────────────────────────────────────────────────────

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let navigate = use_navigate();
    let toasts = use_toaster();

    let session = RwSignal::new(None::<Session>);
    let data = RwSignal::new(DashboardData::default());
    let loading = RwSignal::new(true);
    let tab = RwSignal::new(Tab::default());

    // Guard + load, once per mount.
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            let token = match check_admin_access(&BrowserStore) {
                Access::Redirect(to) => {
                    navigate(to, Default::default());
                    return;
                }
                Access::Granted(granted) => {
                    let token = granted.token.clone();
                    session.set(Some(granted));
                    token
                }
            };

            let navigate = navigate.clone();
            spawn_local(async move {
                let result = fetched(fetch_dashboard(token).await);
                loading.set(false);
                match settle(&BrowserStore, result) {
                    Settled::Ready(loaded) => data.set(loaded),
                    Settled::Failed(notice) => toasts.push(notice),
                    Settled::SignedOut(notice) => {
                        toasts.push(notice);
                        navigate(routes::ADMIN_LOGIN, Default::default());
                    }
                }
            });
        }
    });

    let logout = move |_: leptos::ev::MouseEvent| match Session::clear(&BrowserStore) {
        Ok(()) => {
            toasts.push(Notice::success("Logged out successfully"));
            navigate(routes::ADMIN_LOGIN, Default::default());
        }
        Err(e) => {
            leptos::logging::warn!("Cannot clear session: {e}");
            toasts.push(Notice::error("Logout failed, browser storage could not be cleared"));
        }
    };

    view! {
        <Show when=move || session.with(Option::is_some)>
            <div class="admin-dashboard">
                <header class="admin-header">
                    <div>
                        <h1>"Admin Dashboard"</h1>
                        <p class="welcome">
                            "Welcome, "
                            {move || session.with(|s| s.as_ref().map(|s| s.user.name.clone()))}
                        </p>
                    </div>
                    <div class="admin-actions">
                        <a href=routes::HOME class="view-site">"View Site"</a>
                        <button class="btn-outline" on:click=logout.clone()>"Logout"</button>
                    </div>
                </header>

                <div class="stat-grid">
                    {move || {
                        data.with(DashboardData::stats)
                            .into_iter()
                            .map(|card| view! { <SummaryCard card /> })
                            .collect_view()
                    }}
                </div>

                <div class="tab-list" role="tablist">
                    {Tab::ALL
                        .into_iter()
                        .map(|t| view! {
                            <button
                                role="tab"
                                class=move || if tab.get() == t { "tab active" } else { "tab" }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        })
                        .collect_view()}
                </div>

                <section class="tab-panel">
                    <h2>{move || tab.get().heading()}</h2>
                    {move || tab_body(tab.get(), loading.get(), data)}
                </section>
            </div>
        </Show>
    }
}

/// Spinner while loading, the placeholder for an empty collection, otherwise
/// the table.
fn tab_body(tab: Tab, loading: bool, data: RwSignal<DashboardData>) -> AnyView {
    if loading {
        return view! { <div class="spinner"></div> }.into_any();
    }
    data.with(|d| {
        if d.is_empty(tab) {
            return view! { <p class="empty">{tab.empty_placeholder()}</p> }.into_any();
        }
        match tab {
            Tab::Enquiries => view! { <EnquiryTable rows=d.enquiries.clone() /> }.into_any(),
            Tab::Registrations => {
                view! { <RegistrationTable rows=d.registrations.clone() /> }.into_any()
            }
            Tab::Franchise => {
                view! { <FranchiseTable rows=d.franchise_applications.clone() /> }.into_any()
            }
        }
    })
}
