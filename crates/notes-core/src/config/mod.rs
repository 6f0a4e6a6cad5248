//! Client configuration.
//!
//! Provides the `ClientConfig` struct that tells the API client where the
//! notes collection lives. Client binaries fill it from build-provisioned
//! values; every field falls back to the service's documented defaults.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_NOTES_PATH: &str = "/notes";

/// Raw, possibly partial configuration as provisioned at build time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawClientConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub notes_path: Option<String>,
    #[serde(default)]
    pub page_size: Option<String>,
}

/// Validated client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme + host (+ port), no trailing slash
    pub api_base_url: String,
    /// Path of the notes collection, always starting with `/`
    pub notes_path: String,
    pub default_page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            notes_path: DEFAULT_NOTES_PATH.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Builds a config for an explicit base URL and the default collection path.
    pub fn new(api_base_url: impl AsRef<str>) -> Result<Self, ApiError> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url.as_ref())?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_notes_path(mut self, path: impl AsRef<str>) -> Self {
        self.notes_path = normalize_notes_path(path.as_ref());
        self
    }

    /// Absolute URL of the notes collection
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.notes_path)
    }

    /// Absolute URL of a single note; the id is encoded as one path segment
    pub fn note_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id))
    }
}

impl TryFrom<RawClientConfig> for ClientConfig {
    type Error = ApiError;

    fn try_from(raw: RawClientConfig) -> Result<Self, Self::Error> {
        let api_base_url = match provisioned(raw.api_base_url) {
            Some(url) => normalize_base_url(&url)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };
        let notes_path = provisioned(raw.notes_path)
            .map_or_else(|| DEFAULT_NOTES_PATH.to_string(), |path| normalize_notes_path(&path));
        let default_page_size = match provisioned(raw.page_size) {
            Some(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ApiError::Config(format!(
                        "page size must be a positive integer, got '{value}'"
                    )))
                }
            },
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_base_url,
            notes_path,
            default_page_size,
        })
    }
}

/// A provisioned value, or `None` when it is missing or blank.
fn provisioned(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(ApiError::Config("API base URL must not be empty".to_string()));
    }
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(ApiError::Config(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

fn normalize_notes_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        DEFAULT_NOTES_PATH.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("example.com").is_err());
        assert!(normalize_base_url("ftp://example.com").is_err());
    }

    #[test]
    fn blank_values_count_as_missing() {
        let config = ClientConfig::try_from(RawClientConfig {
            api_base_url: Some("   ".to_string()),
            notes_path: Some(String::new()),
            page_size: Some(" ".to_string()),
        })
        .unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn empty_raw_config_uses_defaults() {
        let config = ClientConfig::try_from(RawClientConfig::default()).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.collection_url(), "http://localhost:8080/notes");
    }

    #[test]
    fn raw_config_normalizes_path_and_size() {
        let config = ClientConfig::try_from(RawClientConfig {
            api_base_url: Some(" http://localhost:8082/ ".to_string()),
            notes_path: Some("api/v1/notes/".to_string()),
            page_size: Some("20".to_string()),
        })
        .unwrap();
        assert_eq!(config.collection_url(), "http://localhost:8082/api/v1/notes");
        assert_eq!(config.default_page_size, 20);
    }

    #[test]
    fn raw_config_rejects_zero_page_size() {
        let error = ClientConfig::try_from(RawClientConfig {
            page_size: Some("0".to_string()),
            ..RawClientConfig::default()
        })
        .unwrap_err();
        assert!(matches!(error, ApiError::Config(_)));
    }

    #[test]
    fn raw_config_rejects_unknown_fields() {
        let error = serde_json::from_str::<RawClientConfig>(r#"{"unexpected": "x"}"#).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn explicit_notes_path_is_normalized() {
        let config = ClientConfig::new("http://localhost:8082")
            .unwrap()
            .with_notes_path("api/v1/notes/");
        assert_eq!(config.collection_url(), "http://localhost:8082/api/v1/notes");
        assert_eq!(
            config.with_notes_path(" ").collection_url(),
            "http://localhost:8082/notes"
        );
    }

    #[test]
    fn note_url_encodes_id_segment() {
        let config = ClientConfig::default();
        assert_eq!(
            config.note_url("a/b c"),
            "http://localhost:8080/notes/a%2Fb%20c"
        );
    }
}
