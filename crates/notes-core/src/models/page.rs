//! Pagination and sorting models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Note;
use crate::error::ValidationErrors;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page sizes offered by the list view.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 20, 50];

/// Note attribute the list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Title,
    Content,
    #[default]
    CreatedAt,
}

impl SortField {
    pub const ALL: [Self; 4] = [Self::Id, Self::Title, Self::Content, Self::CreatedAt];

    /// Wire name used in the `sort` query parameter
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Content => "content",
            Self::CreatedAt => "createdAt",
        }
    }

    /// Column header label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Title => "Title",
            Self::Content => "Content",
            Self::CreatedAt => "Created",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown sort field: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Arrow shown next to the active column header
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a single list call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    pub size: u32,
    pub sort: SortField,
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: SortField::default(),
            direction: SortDirection::default(),
        }
    }
}

impl PageRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        if self.size == 0 {
            return Err(ValidationErrors::new("Page size must be greater than zero.")
                .with_field("size", "must be greater than zero"));
        }
        Ok(())
    }

    /// Query string pairs in the order the service documents them
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.as_str().to_string()),
            ("direction", self.direction.as_str().to_string()),
        ]
    }
}

/// Response body of the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub content: Vec<Note>,
    pub total_elements: u64,
    pub total_pages: u32,
}

/// A fetched slice of notes together with the request that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub notes: Vec<Note>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub request: PageRequest,
}

impl Page {
    pub fn from_response(response: PageResponse, request: PageRequest) -> Self {
        Self {
            notes: response.content,
            total_elements: response.total_elements,
            total_pages: response.total_pages,
            request,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sort_field_round_trips_wire_names() {
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
            assert_eq!(
                serde_json::to_value(field).unwrap(),
                serde_json::Value::String(field.as_str().to_string())
            );
        }
        assert!("updatedAt".parse::<SortField>().is_err());
    }

    #[test]
    fn direction_toggles() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }

    #[test]
    fn default_request_matches_service_defaults() {
        let request = PageRequest::default();
        assert_eq!(
            request.query_pairs(),
            [
                ("page", "0".to_string()),
                ("size", "10".to_string()),
                ("sort", "createdAt".to_string()),
                ("direction", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        let request = PageRequest {
            size: 0,
            ..PageRequest::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn page_response_parses() {
        let response: PageResponse = serde_json::from_str(
            r#"{"content":[{"id":1,"title":"A","content":"x","createdAt":"2024-01-01T00:00:00Z"}],"totalElements":1,"totalPages":1,"number":0}"#,
        )
        .unwrap();
        let page = Page::from_response(response, PageRequest::default());
        assert_eq!(page.notes.len(), 1);
        assert_eq!(page.total_pages, 1);
    }
}
