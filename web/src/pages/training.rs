//! Training page – course catalogue with a registration form.

use leptos::form::ActionForm;
use leptos::prelude::*;

use isocert_common::api::Fetched;
use isocert_common::notice::Notice;

use crate::components::toaster::use_toaster;
use crate::pages::fetched;

// ─── Server function ─────────────────────────────────────────────────────────

#[server(name = RegisterForCourse, prefix = "/api")]
pub async fn register_for_course(
    name: String,
    email: String,
    course_title: String,
    country: String,
) -> Result<Fetched<()>, ServerFnError> {
    use isocert_common::api::{ApiError, Backend};
    use isocert_common::records::NewRegistration;

    let registration = NewRegistration {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        course_title: course_title.trim().to_string(),
        country: country.trim().to_string(),
    };
    if let Err(e) = registration.validate() {
        return Ok(Err(ApiError::Invalid(e.to_string())));
    }

    let state = crate::app::app_state()?;
    let result = state.backend.submit_registration(&registration).await;
    if result.is_ok() {
        tracing::info!("Registration submitted for {}", registration.course_title);
    }
    Ok(result)
}

// ─── Page component ──────────────────────────────────────────────────────────

const COURSES: [&str; 5] = [
    "ISO 9001 Lead Auditor",
    "ISO 9001 Internal Auditor",
    "ISO 14001 Lead Auditor",
    "ISO 45001 Lead Auditor",
    "ISO 27001 Lead Implementer",
];

#[component]
pub fn TrainingPage() -> impl IntoView {
    let submit = ServerAction::<RegisterForCourse>::new();
    let toasts = use_toaster();

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            toasts.push(Notice::for_submission(
                &fetched(result),
                "Registration received! We will email you the course details.",
            ));
        }
    });

    view! {
        <div class="form-page">
            <h1>"Training Courses"</h1>
            <ul class="course-list">
                {COURSES.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
            </ul>

            <h2>"Register"</h2>
            <ActionForm action=submit attr:class="lead-form">
                <label>"Name" <input type="text" name="name" required/></label>
                <label>"Email" <input type="email" name="email" required/></label>
                <label>
                    "Course"
                    <select name="course_title" required>
                        <option value="">"Select a course"</option>
                        {COURSES.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect_view()}
                    </select>
                </label>
                <label>"Country" <input type="text" name="country" required/></label>
                <button type="submit" class="btn-primary" disabled=move || submit.pending().get()>
                    "Register"
                </button>
            </ActionForm>
        </div>
    }
}
