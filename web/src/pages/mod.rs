pub mod admin_dashboard;
pub mod admin_login;
pub mod blog_post;
pub mod contact;
pub mod franchise;
pub mod home;
pub mod not_found;
pub mod resources;
pub mod training;

use isocert_common::api::{ApiError, Fetched};
use leptos::prelude::ServerFnError;

/// Fold a failed server-function call into the backend error type so pages
/// only deal with one kind of failure.
pub(crate) fn fetched<T>(result: Result<Fetched<T>, ServerFnError>) -> Fetched<T> {
    result.unwrap_or_else(|e| Err(ApiError::Transport(e.to_string())))
}
