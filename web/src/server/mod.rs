//! Server-only code: the HTTP client for the backend API.

pub mod backend;
