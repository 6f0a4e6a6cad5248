//! Session credential handling.
//!
//! Token issuance happens elsewhere; this module only stores the bearer token
//! and hands it to the API client through the `CredentialProvider` seam.

use std::fmt;

use thiserror::Error;

/// Bearer token authorizing API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("SessionToken")
            .field(&"[REDACTED]")
            .finish()
    }
}

/// Source of the credential attached to every API call.
///
/// Read once per request; implementations must not block.
pub trait CredentialProvider: Send + Sync {
    fn access_token(&self) -> Option<SessionToken>;
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Session storage error: {0}")]
    Storage(String),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// Persistent home of the session token (browser storage, memory, ...).
pub trait SessionPersistence: Clone + Send + Sync + 'static {
    fn load_token(&self) -> SessionResult<Option<SessionToken>>;
    fn save_token(&self, token: &SessionToken) -> SessionResult<()>;
    fn clear_token(&self) -> SessionResult<()>;
}

/// Credential provider reading from a session store on every call.
#[derive(Debug, Clone)]
pub struct StoredCredentials<S: SessionPersistence> {
    store: S,
}

impl<S: SessionPersistence> StoredCredentials<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: SessionPersistence> CredentialProvider for StoredCredentials<S> {
    fn access_token(&self) -> Option<SessionToken> {
        match self.store.load_token() {
            Ok(token) => token,
            Err(error) => {
                tracing::warn!("Failed to read session token: {}", error);
                None
            }
        }
    }
}

/// Fixed credential, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<SessionToken>);

impl StaticCredentials {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(SessionToken::new(token))
    }

    pub const fn anonymous() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn access_token(&self) -> Option<SessionToken> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct MemorySessionStore {
        token: Arc<Mutex<Option<SessionToken>>>,
    }

    impl MemorySessionStore {
        fn lock(&self) -> SessionResult<std::sync::MutexGuard<'_, Option<SessionToken>>> {
            self.token
                .lock()
                .map_err(|error| SessionError::Storage(error.to_string()))
        }
    }

    impl SessionPersistence for MemorySessionStore {
        fn load_token(&self) -> SessionResult<Option<SessionToken>> {
            Ok(self.lock()?.clone())
        }

        fn save_token(&self, token: &SessionToken) -> SessionResult<()> {
            *self.lock()? = Some(token.clone());
            Ok(())
        }

        fn clear_token(&self) -> SessionResult<()> {
            *self.lock()? = None;
            Ok(())
        }
    }

    #[test]
    fn session_token_rejects_blank_input() {
        assert!(SessionToken::new("  ").is_none());
        assert_eq!(SessionToken::new(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn session_token_debug_redacts_value() {
        let token = SessionToken::new("secret-token").unwrap();
        let rendered = format!("{token:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("secret-token"));
    }

    #[test]
    fn stored_credentials_follow_the_store() {
        let store = MemorySessionStore::default();
        let credentials = StoredCredentials::new(store.clone());
        assert!(credentials.access_token().is_none());

        store
            .save_token(&SessionToken::new("t1").unwrap())
            .unwrap();
        assert_eq!(credentials.access_token().unwrap().as_str(), "t1");

        store.clear_token().unwrap();
        assert!(credentials.access_token().is_none());
    }

    #[test]
    fn static_credentials() {
        assert!(StaticCredentials::anonymous().access_token().is_none());
        assert_eq!(
            StaticCredentials::new("abc").access_token().unwrap().as_str(),
            "abc"
        );
    }
}
