//! Contact page – enquiry form.

use leptos::form::ActionForm;
use leptos::prelude::*;

use isocert_common::api::Fetched;
use isocert_common::notice::Notice;

use crate::components::toaster::use_toaster;
use crate::pages::fetched;

// ─── Server function ─────────────────────────────────────────────────────────

#[server(name = SubmitEnquiry, prefix = "/api")]
pub async fn submit_enquiry(
    name: String,
    email: String,
    phone: Option<String>,
    service_interested_in: Option<String>,
    message: String,
) -> Result<Fetched<()>, ServerFnError> {
    use isocert_common::api::{ApiError, Backend};
    use isocert_common::records::{non_blank, NewEnquiry};

    let enquiry = NewEnquiry {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        phone: non_blank(phone),
        service_interested_in: non_blank(service_interested_in),
        message: message.trim().to_string(),
    };
    if let Err(e) = enquiry.validate() {
        return Ok(Err(ApiError::Invalid(e.to_string())));
    }

    let state = crate::app::app_state()?;
    let result = state.backend.submit_enquiry(&enquiry).await;
    if result.is_ok() {
        tracing::info!("Enquiry submitted");
    }
    Ok(result)
}

// ─── Page component ──────────────────────────────────────────────────────────

const SERVICES: [&str; 6] = [
    "ISO 9001 Quality Management",
    "ISO 14001 Environmental Management",
    "ISO 45001 Occupational Health & Safety",
    "ISO 27001 Information Security",
    "ISO 22000 Food Safety",
    "Training",
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let submit = ServerAction::<SubmitEnquiry>::new();
    let toasts = use_toaster();

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            toasts.push(Notice::for_submission(
                &fetched(result),
                "Thank you! We will get back to you soon.",
            ));
        }
    });

    view! {
        <div class="form-page">
            <h1>"Contact Us"</h1>
            <p>"Tell us what you need and our team will be in touch."</p>

            <ActionForm action=submit attr:class="lead-form">
                <label>"Name" <input type="text" name="name" required/></label>
                <label>"Email" <input type="email" name="email" required/></label>
                <label>"Phone" <input type="tel" name="phone"/></label>
                <label>
                    "Service"
                    <select name="service_interested_in">
                        <option value="">"Select a service"</option>
                        {SERVICES.into_iter().map(|s| view! { <option value=s>{s}</option> }).collect_view()}
                    </select>
                </label>
                <label>"Message" <textarea name="message" rows="5" required></textarea></label>
                <button type="submit" class="btn-primary" disabled=move || submit.pending().get()>
                    "Send Enquiry"
                </button>
            </ActionForm>
        </div>
    }
}
