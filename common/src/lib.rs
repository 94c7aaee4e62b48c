//! Shared types and front-office logic for the isocert site: API records,
//! admin session handling, and the dashboard / blog loaders.
//!
//! Nothing in here depends on Leptos so it compiles for both the server
//! binary and the WASM bundle.

pub mod api;
pub mod blog;
pub mod config;
pub mod dashboard;
pub mod notice;
pub mod records;
pub mod routes;
pub mod session;
