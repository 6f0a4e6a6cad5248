//! Note model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::error::ValidationErrors;

/// Server-assigned note identifier.
///
/// Opaque to the client: the service may send it as a JSON string or integer,
/// and it is kept in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap an identifier received from the service or a route.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Note ID cannot be empty")]
pub struct ParseNoteIdError;

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseNoteIdError);
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNoteId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = match RawNoteId::deserialize(deserializer)? {
            RawNoteId::Text(value) => value,
            RawNoteId::Unsigned(value) => value.to_string(),
            RawNoteId::Signed(value) => value.to_string(),
        };
        if id.trim().is_empty() {
            return Err(serde::de::Error::custom("note id must not be empty"));
        }
        Ok(Self(id))
    }
}

/// A note persisted by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier, assigned by the service
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Creation timestamp, assigned by the service and never sent back
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Draft pre-populated with this note's mutable fields
    #[must_use]
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }

    /// Get first line of the content, truncated to `max_len` characters
    #[must_use]
    pub fn content_preview(&self, max_len: usize) -> String {
        let first_line = self.content.lines().next().unwrap_or("");
        let mut preview: String = first_line.chars().take(max_len).collect();
        if first_line.chars().count() > max_len || self.content.lines().nth(1).is_some() {
            preview.push('…');
        }
        preview
    }

    /// Human-readable creation time
    #[must_use]
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}

/// Title/content payload for create and update calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Check the submission precondition: both fields non-empty
    /// (whitespace-only counts as empty).
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new("Title and content are required.");
        if self.title.trim().is_empty() {
            errors = errors.with_field("title", "Title is required.");
        }
        if self.content.trim().is_empty() {
            errors = errors.with_field("content", "Content is required.");
        }
        if errors.fields.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Accepts RFC 3339 timestamps, and zone-less ones which are taken as UTC.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|error| serde::de::Error::custom(format!("invalid createdAt '{raw}': {error}")))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn note_id_accepts_numbers_and_strings() {
        let numeric: NoteId = serde_json::from_str("1").unwrap();
        assert_eq!(numeric.as_str(), "1");

        let text: NoteId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(text.as_str(), "a1b2");

        assert!(serde_json::from_str::<NoteId>("\"  \"").is_err());
    }

    #[test]
    fn note_id_parse_rejects_empty() {
        assert_eq!("  ".parse::<NoteId>(), Err(ParseNoteIdError));
        assert_eq!(" 42 ".parse::<NoteId>().unwrap().as_str(), "42");
    }

    #[test]
    fn note_deserializes_wire_format() {
        let note: Note = serde_json::from_str(
            r#"{"id":1,"title":"A","content":"x","createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(note.id, NoteId::new("1"));
        assert_eq!(note.title, "A");
        assert_eq!(note.created_label(), "2024-01-01 00:00 UTC");
    }

    #[test]
    fn note_accepts_zoneless_timestamp() {
        let note: Note = serde_json::from_str(
            r#"{"id":"7","title":"A","content":"x","createdAt":"2024-03-05T10:20:30.123"}"#,
        )
        .unwrap();
        assert_eq!(note.created_label(), "2024-03-05 10:20 UTC");
    }

    #[test]
    fn draft_validation_flags_each_empty_field() {
        assert!(NoteDraft::new("T", "C").validate().is_ok());

        let errors = NoteDraft::new("T", "   ").validate().unwrap_err();
        assert_eq!(errors.field("content"), Some("Content is required."));
        assert_eq!(errors.field("title"), None);

        let errors = NoteDraft::default().validate().unwrap_err();
        assert_eq!(errors.fields.len(), 2);
    }

    #[test]
    fn draft_serializes_only_mutable_fields() {
        let json = serde_json::to_value(NoteDraft::new("T", "C")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "T", "content": "C"}));
    }

    #[test]
    fn content_preview_marks_truncation() {
        let note: Note = serde_json::from_str(
            r#"{"id":1,"title":"A","content":"First line\nSecond","createdAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(note.content_preview(50), "First line…");
        assert_eq!(note.content_preview(5), "First…");
    }
}
