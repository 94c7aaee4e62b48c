//! Server entry-point – Axum + Leptos SSR.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;

    use isocert_common::config;
    use isocert_web::app::{shell, App, AppState};
    use isocert_web::server::backend::HttpBackend;

    // ── Configuration + tracing ──────────────────────────────────────────
    let loaded = config::load_from_env();
    let default_filter = loaded
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| config::Config::default().log_filter);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Cannot load configuration: {e:#}");
            std::process::exit(1);
        }
    };

    let conf = match get_configuration(None) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Cannot load Leptos options: {e}");
            std::process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let backend = match HttpBackend::new(&config) {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("Cannot initialise backend client: {e:#}");
            std::process::exit(1);
        }
    };
    tracing::info!("Backend API at {}", config.api_base_url);

    let state = AppState {
        backend: Arc::new(backend),
    };

    // ── Routes ───────────────────────────────────────────────────────────
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let state = state.clone();
                move || {
                    provide_context(state.clone());
                }
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        // Static assets (WASM bundle, CSS, images), otherwise the 404 page.
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("isocert web listening on http://{addr}");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Cannot bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This binary is only built with the `ssr` feature.
    // The WASM entry point is `lib::hydrate()`.
}
