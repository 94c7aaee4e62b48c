//! Records exchanged with the backend API, plus the display helpers the
//! tables and the blog use.
//!
//! Timestamps are kept as the strings the API sent; they are only parsed
//! for display.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Lead records ────────────────────────────────────────────────────────────

/// A lead submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service_interested_in: Option<String>,
    pub message: String,
    pub created_at: String,
}

impl Enquiry {
    /// Service column text; `-` when the enquirer left it blank.
    pub fn service_label(&self) -> &str {
        self.service_interested_in
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("-")
    }
}

/// A course sign-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub course_title: String,
    pub country: String,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub created_at: String,
}

/// A prospective franchisee's submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseApplication {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub business_name: String,
    pub country: String,
    pub experience: String,
    pub email: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub created_at: String,
}

// ─── Statuses ────────────────────────────────────────────────────────────────

/// Anything other than `paid` is treated as unpaid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PaymentStatus {
    Paid,
    #[default]
    Unpaid,
}

impl From<String> for PaymentStatus {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case("paid") {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        }
    }
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "badge badge-success",
            PaymentStatus::Unpaid => "badge badge-warning",
        }
    }
}

/// Review state of a franchise application.  Unrecognised values read as
/// pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl From<String> for ApplicationStatus {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "approved" => ApplicationStatus::Approved,
            "rejected" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Pending,
        }
    }
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ApplicationStatus::Approved => "badge badge-success",
            ApplicationStatus::Rejected => "badge badge-danger",
            ApplicationStatus::Pending => "badge badge-warning",
        }
    }
}

// ─── Blog ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub created_at: String,
}

impl BlogPost {
    /// Tags to render as badges (empty when the post has none).
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }
}

// ─── Submissions (lead forms) ────────────────────────────────────────────────

/// Rejected form input, caught before anything is sent to the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEnquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_interested_in: Option<String>,
    pub message: String,
}

impl NewEnquiry {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Name", &self.name)?;
        require_email(&self.email)?;
        require("Message", &self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub course_title: String,
    pub country: String,
}

impl NewRegistration {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Name", &self.name)?;
        require_email(&self.email)?;
        require("Course", &self.course_title)?;
        require("Country", &self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFranchiseApplication {
    pub name: String,
    pub business_name: String,
    pub country: String,
    pub experience: String,
    pub email: String,
}

impl NewFranchiseApplication {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Name", &self.name)?;
        require("Business name", &self.business_name)?;
        require("Country", &self.country)?;
        require("Experience", &self.experience)?;
        require_email(&self.email)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(())
    }
}

fn require_email(value: &str) -> Result<(), ValidationError> {
    require("Email", value)?;
    match value.trim().split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

/// Normalise an optional form field: blank input becomes `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ─── Display helpers ─────────────────────────────────────────────────────────

const EXCERPT_CHARS: usize = 50;

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// Short US date for table cells, e.g. `3/7/2024`.  Unparseable input is
/// shown as-is.
pub fn table_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Long date for articles, e.g. `March 7, 2024`.
pub fn long_date(raw: &str) -> String {
    parse_date(raw)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// First 50 characters of `text`, with `...` appended when cut.
pub fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let mut short: String = text.chars().take(EXCERPT_CHARS).collect();
    short.push_str("...");
    short
}

// ─── tests ───────────────────────────────────────────────────────────────
