//! Fallback page for unknown paths.

use leptos::prelude::*;

use isocert_common::routes;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href=routes::HOME class="back-link">"← Back to Home"</a>
        </div>
    }
}
