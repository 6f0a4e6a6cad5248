//! Browser session persistence using `localStorage`.

use notes_core::auth::{SessionError, SessionPersistence, SessionResult, SessionToken};

const TOKEN_STORAGE_KEY: &str = "token";

/// Session store backed by the browser's `localStorage` (`web-sys`).
#[derive(Debug, Clone)]
pub struct LocalStorageSessionStore {
    key: String,
}

impl Default for LocalStorageSessionStore {
    fn default() -> Self {
        Self {
            key: TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl LocalStorageSessionStore {
    fn storage(&self) -> SessionResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| SessionError::Unavailable("no browser window".to_string()))?;
        window
            .local_storage()
            .map_err(|error| SessionError::Unavailable(format!("{error:?}")))?
            .ok_or_else(|| SessionError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl SessionPersistence for LocalStorageSessionStore {
    fn load_token(&self) -> SessionResult<Option<SessionToken>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|error| SessionError::Storage(format!("{error:?}")))?;
        Ok(raw.and_then(SessionToken::new))
    }

    fn save_token(&self, token: &SessionToken) -> SessionResult<()> {
        self.storage()?
            .set_item(&self.key, token.as_str())
            .map_err(|error| SessionError::Storage(format!("{error:?}")))
    }

    fn clear_token(&self) -> SessionResult<()> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|error| SessionError::Storage(format!("{error:?}")))
    }
}
