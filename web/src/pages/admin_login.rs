//! Admin login.  A successful login stores the token and user record in
//! local storage and moves on to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use isocert_common::api::{ApiError, Fetched, LoginResponse};
use isocert_common::notice::Notice;
use isocert_common::routes;
use isocert_common::session::Session;

use crate::components::toaster::use_toaster;
use crate::pages::fetched;
use crate::storage::BrowserStore;

#[server(name = Login, prefix = "/api")]
pub async fn login(email: String, password: String) -> Result<Fetched<LoginResponse>, ServerFnError> {
    use isocert_common::api::{Backend, LoginRequest};

    let state = crate::app::app_state()?;
    let request = LoginRequest {
        email: email.trim().to_string(),
        password,
    };
    let result = state.backend.login(&request).await;
    match &result {
        Ok(resp) => tracing::info!("Login succeeded for {}", resp.user.name),
        Err(e) => tracing::warn!("Login failed: {e}"),
    }
    Ok(result)
}

#[component]
pub fn AdminLogin() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let pending = RwSignal::new(false);

    let navigate = use_navigate();
    let toasts = use_toaster();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        pending.set(true);

        let (email, password) = (email.get_untracked(), password.get_untracked());
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = fetched(login(email, password).await);
            pending.set(false);
            match result {
                Ok(LoginResponse { token, user }) => {
                    let session = Session { token, user };
                    match session.save(&BrowserStore) {
                        Ok(()) => {
                            toasts.push(Notice::success("Login successful"));
                            navigate(routes::ADMIN_DASHBOARD, Default::default());
                        }
                        Err(e) => {
                            leptos::logging::warn!("Cannot store session: {e}");
                            toasts.push(Notice::error(
                                "Login succeeded, but this browser would not store the session",
                            ));
                        }
                    }
                }
                Err(ApiError::Unauthorized) => {
                    toasts.push(Notice::error("Invalid email or password"));
                }
                Err(_) => toasts.push(Notice::error("Login failed, please try again")),
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Admin Login"</h1>
                <label>
                    "Email"
                    <input type="email" required bind:value=(email, set_email)/>
                </label>
                <label>
                    "Password"
                    <input type="password" required bind:value=(password, set_password)/>
                </label>
                <button type="submit" class="btn-primary" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in…" } else { "Login" }}
                </button>
            </form>
        </div>
    }
}
