//! Root Leptos application component with routing.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::nav::Nav;
use crate::components::toaster::{provide_toaster, Toaster};
use crate::pages::{
    admin_dashboard::AdminDashboard, admin_login::AdminLogin, blog_post::BlogPostPage,
    contact::ContactPage, franchise::FranchisePage, home::Home, not_found::NotFound,
    resources::ResourcesPage, training::TrainingPage,
};

/// Server-side application state, provided as Leptos context for server functions.
#[derive(Clone, Debug)]
#[cfg(feature = "ssr")]
pub struct AppState {
    pub backend: std::sync::Arc<crate::server::backend::HttpBackend>,
}

/// Look up the [`AppState`] inside a server function.
#[cfg(feature = "ssr")]
pub fn app_state() -> Result<AppState, ServerFnError> {
    use_context::<AppState>().ok_or_else(|| ServerFnError::new("Missing AppState"))
}

/// HTML document wrapping `<App/>` for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();

    view! {
        <Stylesheet id="leptos" href="/pkg/isocert-web.css"/>
        <Title text="ISO Certification & Training"/>
        <Meta name="description" content="ISO certification, auditor training and franchise opportunities"/>

        <Router>
            <Nav/>
            <main class="main-content">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/training") view=TrainingPage/>
                    <Route path=path!("/franchise") view=FranchisePage/>
                    <Route path=path!("/resources") view=ResourcesPage/>
                    <Route path=path!("/resources/blog/:post_id") view=BlogPostPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/admin/login") view=AdminLogin/>
                    <Route path=path!("/admin/dashboard") view=AdminDashboard/>
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
