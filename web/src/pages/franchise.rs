//! Franchise page – application form for prospective partners.

use leptos::form::ActionForm;
use leptos::prelude::*;

use isocert_common::api::Fetched;
use isocert_common::notice::Notice;

use crate::components::toaster::use_toaster;
use crate::pages::fetched;

#[server(name = ApplyForFranchise, prefix = "/api")]
pub async fn apply_for_franchise(
    name: String,
    business_name: String,
    country: String,
    experience: String,
    email: String,
) -> Result<Fetched<()>, ServerFnError> {
    use isocert_common::api::{ApiError, Backend};
    use isocert_common::records::NewFranchiseApplication;

    let application = NewFranchiseApplication {
        name: name.trim().to_string(),
        business_name: business_name.trim().to_string(),
        country: country.trim().to_string(),
        experience: experience.trim().to_string(),
        email: email.trim().to_string(),
    };
    if let Err(e) = application.validate() {
        return Ok(Err(ApiError::Invalid(e.to_string())));
    }

    let state = crate::app::app_state()?;
    let result = state.backend.submit_franchise_application(&application).await;
    if result.is_ok() {
        tracing::info!("Franchise application submitted from {}", application.country);
    }
    Ok(result)
}

#[component]
pub fn FranchisePage() -> impl IntoView {
    let submit = ServerAction::<ApplyForFranchise>::new();
    let toasts = use_toaster();

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            toasts.push(Notice::for_submission(
                &fetched(result),
                "Application received! Our franchise team will contact you.",
            ));
        }
    });

    view! {
        <div class="form-page">
            <h1>"Become a Franchise Partner"</h1>
            <p>"Offer certification and training services under our brand in your country."</p>

            <ActionForm action=submit attr:class="lead-form">
                <label>"Name" <input type="text" name="name" required/></label>
                <label>"Business name" <input type="text" name="business_name" required/></label>
                <label>"Country" <input type="text" name="country" required/></label>
                <label>
                    "Experience"
                    <textarea name="experience" rows="4" required></textarea>
                </label>
                <label>"Email" <input type="email" name="email" required/></label>
                <button type="submit" class="btn-primary" disabled=move || submit.pending().get()>
                    "Submit Application"
                </button>
            </ActionForm>
        </div>
    }
}
