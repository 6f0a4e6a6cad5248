//! Error types for notes-core

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Result type alias using notes-core's `ApiError`
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by the notes API client and the view-state transitions.
///
/// `Http` and `Transport` together form the generic request-failure class;
/// `NotFound` and `Validation` are its specialisations for 404 and rejected
/// payloads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-success HTTP status
    #[error("Request failed with HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Network failure or malformed response body
    #[error("Request failed: {0}")]
    Transport(String),

    /// Resource no longer exists (HTTP 404)
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Payload rejected, either locally or by the server
    #[error("Invalid note: {0}")]
    Validation(ValidationErrors),

    /// No session credential available, or the server refused it
    #[error("Not signed in")]
    Unauthenticated,

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Message suitable for an error region in the UI.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { status, .. } if *status >= 500 => {
                format!("The notes service failed (HTTP {status}). Please try again.")
            }
            Self::Http { status, body } if body.is_empty() => {
                format!("The notes service rejected the request (HTTP {status}).")
            }
            Self::Http { status, body } => {
                format!("The notes service rejected the request (HTTP {status}): {body}")
            }
            Self::Transport(message) => format!("Could not reach the notes service: {message}"),
            Self::NotFound(_) => "This note no longer exists.".to_string(),
            Self::Validation(errors) => errors.message.clone(),
            Self::Unauthenticated => "You are not signed in.".to_string(),
            Self::Config(message) => format!("The client is misconfigured: {message}"),
        }
    }

    /// Returns true for errors that mean the item is gone.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Per-field validation messages, if any.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Validation(errors) if !errors.fields.is_empty() => Some(&errors.fields),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

/// A rejected payload: an overall message plus optional per-field messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.fields.insert(field.into(), message.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Best-effort parse of a server validation body.
    ///
    /// Understands `{ "message": ..., "errors": [{ "field": ..., "message": ... }] }`;
    /// anything else becomes the overall message verbatim (compacted).
    pub fn from_response_body(body: &str) -> Self {
        match serde_json::from_str::<ValidationBody>(body) {
            Ok(parsed) => {
                let message = parsed
                    .message
                    .or(parsed.error)
                    .map(|message| trimmed_body(&message))
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| "The server rejected the note.".to_string());
                let fields = parsed
                    .errors
                    .into_iter()
                    .map(|entry| (entry.field, trimmed_body(&entry.message)))
                    .collect();
                Self { message, fields }
            }
            Err(_) => {
                let compacted = trimmed_body(body);
                if compacted.is_empty() {
                    Self::new("The server rejected the note.")
                } else {
                    Self::new(compacted)
                }
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Response text as shown in errors and logs, capped at 180 characters.
pub(crate) fn trimmed_body(body: &str) -> String {
    body.trim().chars().take(180).collect()
}

#[derive(Debug, Deserialize)]
struct ValidationBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<FieldErrorBody>,
}

#[derive(Debug, Deserialize)]
struct FieldErrorBody {
    field: String,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_body_with_field_errors() {
        let body = r#"{"message":"Validation failed","errors":[{"field":"title","message":"must not be blank"}]}"#;
        let parsed = ValidationErrors::from_response_body(body);
        assert_eq!(parsed.message, "Validation failed");
        assert_eq!(parsed.field("title"), Some("must not be blank"));
        assert_eq!(parsed.field("content"), None);
    }

    #[test]
    fn validation_body_falls_back_to_raw_text() {
        let parsed = ValidationErrors::from_response_body("title too long");
        assert_eq!(parsed.message, "title too long");
        assert!(parsed.fields.is_empty());

        let empty = ValidationErrors::from_response_body("");
        assert_eq!(empty.message, "The server rejected the note.");
    }

    #[test]
    fn trimmed_body_caps_length() {
        assert_eq!(trimmed_body("  boom \n"), "boom");
        assert_eq!(trimmed_body(&"x".repeat(500)).len(), 180);
    }

    #[test]
    fn user_message_is_never_empty() {
        let errors = [
            ApiError::Http {
                status: 500,
                body: String::new(),
            },
            ApiError::Http {
                status: 409,
                body: String::new(),
            },
            ApiError::Transport("connection refused".to_string()),
            ApiError::NotFound("42".to_string()),
            ApiError::Validation(ValidationErrors::new("bad")),
            ApiError::Unauthenticated,
            ApiError::Config("bad url".to_string()),
        ];
        for error in errors {
            assert!(!error.user_message().is_empty(), "{error:?}");
        }
    }

    #[test]
    fn field_errors_only_for_validation_with_fields() {
        let plain = ApiError::Validation(ValidationErrors::new("bad"));
        assert!(plain.field_errors().is_none());

        let with_field =
            ApiError::Validation(ValidationErrors::new("bad").with_field("content", "required"));
        assert_eq!(
            with_field
                .field_errors()
                .and_then(|fields| fields.get("content"))
                .map(String::as_str),
            Some("required")
        );
        assert!(ApiError::NotFound("1".to_string()).is_not_found());
    }
}
