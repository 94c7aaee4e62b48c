//! Transient toast notifications.

use serde::{Deserialize, Serialize};

use crate::api::{ApiError, Fetched};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Success,
    Error,
}

/// A short message shown to the user for a few seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// Notice for a finished lead-form submission.  Validation messages are
    /// shown verbatim; anything else gets a generic retry message.
    pub fn for_submission(result: &Fetched<()>, thanks: &str) -> Self {
        match result {
            Ok(()) => Notice::success(thanks),
            Err(ApiError::Invalid(message)) => Notice::error(message.clone()),
            Err(_) => Notice::error("Submission failed, please try again"),
        }
    }

    /// CSS class for the toast container.
    pub fn css_class(&self) -> &'static str {
        match self.level {
            Level::Success => "toast toast-success",
            Level::Error => "toast toast-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_notices() {
        let ok = Notice::for_submission(&Ok(()), "Thanks!");
        assert_eq!(ok, Notice::success("Thanks!"));
        assert_eq!(ok.css_class(), "toast toast-success");

        let invalid = Notice::for_submission(&Err(ApiError::Invalid("Name is required".into())), "Thanks!");
        assert_eq!(invalid, Notice::error("Name is required"));

        let failed = Notice::for_submission(&Err(ApiError::Status(500)), "Thanks!");
        assert_eq!(failed.level, Level::Error);
        assert_eq!(failed.message, "Submission failed, please try again");
    }
}
