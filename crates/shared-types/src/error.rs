use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error shared by the UI crates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Error message for a single form field, if validation flagged it.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// Message suitable for a toast.
    ///
    /// Internal errors never leak their details; an empty message falls back
    /// to a generic one.
    pub fn friendly_message(&self) -> String {
        if self.kind == AppErrorKind::InternalError || self.message.trim().is_empty() {
            GENERIC_MESSAGE.to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(format!("serialization failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_has_correct_kind() {
        let err = AppError::not_found("missing patient");
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "missing patient");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "invalid format".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_error("email"), Some("invalid format"));
        assert_eq!(err.field_error("name"), None);
    }

    #[test]
    fn friendly_message_hides_internal_details() {
        let err = AppError::internal("cookie write failed: SecurityError");
        assert_eq!(err.friendly_message(), GENERIC_MESSAGE);
    }

    #[test]
    fn friendly_message_passes_through_user_errors() {
        assert_eq!(
            AppError::bad_request("Unknown role").friendly_message(),
            "Unknown role"
        );
        assert_eq!(AppError::bad_request("  ").friendly_message(), GENERIC_MESSAGE);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::bad_request("bad level");
        assert_eq!(format!("{}", err), "BadRequest: bad level");
    }

    #[test]
    fn json_error_converts_to_internal() {
        let parse_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: AppError = parse_err.into();
        assert_eq!(err.kind, AppErrorKind::InternalError);
    }

    #[test]
    fn empty_field_errors_are_skipped_when_serialized() {
        let json = serde_json::to_string(&AppError::not_found("gone")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
