//! HTTP client for the remote notes service.
//!
//! Thin wrapper over the REST contract: every call reads the bearer token from
//! the injected `CredentialProvider`, and non-success statuses are mapped onto
//! the `ApiError` taxonomy.

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::CredentialProvider;
use crate::config::ClientConfig;
use crate::error::{trimmed_body, ApiError, Result, ValidationErrors};
use crate::models::{Note, NoteDraft, NoteId, Page, PageRequest, PageResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Call {
    const fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Only payload-carrying calls report rejected input as validation errors.
    const fn sends_payload(self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }
}

/// Client for the notes collection described by a `ClientConfig`.
#[derive(Clone)]
pub struct NotesClient {
    config: ClientConfig,
    client: reqwest::Client,
    credentials: Arc<dyn CredentialProvider>,
}

impl fmt::Debug for NotesClient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NotesClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl NotesClient {
    pub fn new(config: ClientConfig, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| ApiError::Config(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self {
            config,
            client,
            credentials,
        })
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether a session credential is currently available.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.access_token().is_some()
    }

    /// Fetches one page of notes.
    pub async fn list(&self, request: &PageRequest) -> Result<Page> {
        request.validate().map_err(ApiError::Validation)?;
        let url = self.config.collection_url();
        let builder = self
            .authorized(Call::List, Method::GET, &url)?
            .query(&request.query_pairs());
        let response = self.send(Call::List, builder, None).await?;
        let body: PageResponse = read_json(Call::List, response).await?;
        tracing::debug!(
            "Fetched page {} ({} notes, {} total)",
            request.page,
            body.content.len(),
            body.total_elements
        );
        Ok(Page::from_response(body, *request))
    }

    pub async fn get(&self, id: &NoteId) -> Result<Note> {
        let url = self.config.note_url(id.as_str());
        let builder = self.authorized(Call::Get, Method::GET, &url)?;
        let response = self.send(Call::Get, builder, Some(id)).await?;
        read_json(Call::Get, response).await
    }

    /// Persists a new note; the service assigns `id` and `createdAt`.
    pub async fn create(&self, draft: &NoteDraft) -> Result<Note> {
        draft.validate().map_err(ApiError::Validation)?;
        let url = self.config.collection_url();
        let builder = self.authorized(Call::Create, Method::POST, &url)?.json(draft);
        let response = self.send(Call::Create, builder, None).await?;
        let note: Note = read_json(Call::Create, response).await?;
        tracing::info!("Created note {}", note.id);
        Ok(note)
    }

    /// Replaces the title and content of an existing note.
    pub async fn update(&self, id: &NoteId, draft: &NoteDraft) -> Result<Note> {
        draft.validate().map_err(ApiError::Validation)?;
        let url = self.config.note_url(id.as_str());
        let builder = self.authorized(Call::Update, Method::PUT, &url)?.json(draft);
        let response = self.send(Call::Update, builder, Some(id)).await?;
        let note: Note = read_json(Call::Update, response).await?;
        tracing::info!("Updated note {}", note.id);
        Ok(note)
    }

    /// Removes a note. Deleting it again yields `ApiError::NotFound`.
    pub async fn delete(&self, id: &NoteId) -> Result<()> {
        let url = self.config.note_url(id.as_str());
        let builder = self.authorized(Call::Delete, Method::DELETE, &url)?;
        self.send(Call::Delete, builder, Some(id)).await?;
        tracing::info!("Deleted note {}", id);
        Ok(())
    }

    fn authorized(&self, call: Call, method: Method, url: &str) -> Result<RequestBuilder> {
        let Some(token) = self.credentials.access_token() else {
            tracing::warn!("Refusing {} call without a session token", call.name());
            return Err(ApiError::Unauthenticated);
        };
        tracing::debug!("{} {} ({})", method, url, call.name());
        Ok(self
            .client
            .request(method, url)
            .bearer_auth(token.as_str())
            .header(reqwest::header::ACCEPT, "application/json"))
    }

    async fn send(
        &self,
        call: Call,
        builder: RequestBuilder,
        subject: Option<&NoteId>,
    ) -> Result<Response> {
        let response = builder.send().await.map_err(|error| {
            tracing::warn!("{} request failed: {}", call.name(), error);
            ApiError::Transport(error.to_string())
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            "{} request failed with HTTP {}: {}",
            call.name(),
            status.as_u16(),
            trimmed_body(&body)
        );
        Err(map_failure(call, status, &body, subject))
    }
}

fn map_failure(call: Call, status: StatusCode, body: &str, subject: Option<&NoteId>) -> ApiError {
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(
            subject.map_or_else(|| "notes collection".to_string(), ToString::to_string),
        ),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthenticated,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY if call.sends_payload() => {
            ApiError::Validation(ValidationErrors::from_response_body(body))
        }
        _ => ApiError::Http {
            status: status.as_u16(),
            body: trimmed_body(body),
        },
    }
}

async fn read_json<T: DeserializeOwned>(call: Call, response: Response) -> Result<T> {
    response.json::<T>().await.map_err(|error| {
        ApiError::Transport(format!(
            "Failed to parse {} response: {error}",
            call.name()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_failure_not_found_names_the_note() {
        let id = NoteId::new("42");
        let error = map_failure(Call::Delete, StatusCode::NOT_FOUND, "", Some(&id));
        assert_eq!(error, ApiError::NotFound("42".to_string()));
    }

    #[test]
    fn map_failure_validation_only_for_payload_calls() {
        let body = r#"{"message":"bad","errors":[{"field":"title","message":"blank"}]}"#;
        let error = map_failure(Call::Create, StatusCode::UNPROCESSABLE_ENTITY, body, None);
        assert!(matches!(error, ApiError::Validation(ref errors) if errors.field("title") == Some("blank")));

        let error = map_failure(Call::List, StatusCode::BAD_REQUEST, body, None);
        assert!(matches!(error, ApiError::Http { status: 400, .. }));
    }

    #[test]
    fn map_failure_server_error_keeps_status_and_body() {
        let error = map_failure(Call::List, StatusCode::INTERNAL_SERVER_ERROR, " boom ", None);
        assert_eq!(
            error,
            ApiError::Http {
                status: 500,
                body: "boom".to_string()
            }
        );
    }

    #[test]
    fn map_failure_auth_statuses() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            assert_eq!(
                map_failure(Call::Get, status, "", None),
                ApiError::Unauthenticated
            );
        }
    }
}
