//! Landing page – entry points to the lead forms and resources.

use leptos::prelude::*;
use leptos_router::components::A;

use isocert_common::routes;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"ISO Certification & Professional Training"</h1>
                <p>"Certification, auditor courses and a growing franchise network."</p>
                <A href=routes::CONTACT attr:class="btn-primary">"Get a Quote"</A>
            </section>

            <section class="cta-grid">
                <A href=routes::TRAINING attr:class="cta-card">
                    <h2>"Training"</h2>
                    <p>"Register for lead auditor and internal auditor courses."</p>
                </A>
                <A href=routes::FRANCHISE attr:class="cta-card">
                    <h2>"Franchise"</h2>
                    <p>"Bring certification services to your region."</p>
                </A>
                <A href=routes::RESOURCES attr:class="cta-card">
                    <h2>"Resources"</h2>
                    <p>"Articles and guides on ISO standards."</p>
                </A>
            </section>
        </div>
    }
}
