//! Application state management
//!
//! Services and session flags shared through a Dioxus context provider.

use dioxus::prelude::*;

use notes_core::auth::{SessionPersistence, SessionToken};
use notes_core::NotesClient;

use crate::services::LocalStorageSessionStore;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// API client; reads the session token on every request
    pub client: Signal<NotesClient>,
    /// Where the session token lives
    pub session: Signal<LocalStorageSessionStore>,
    /// Whether a session token is stored
    pub signed_in: Signal<bool>,
}

impl AppState {
    #[must_use]
    pub fn client(&self) -> NotesClient {
        self.client.read().clone()
    }

    pub fn default_page_size(&self) -> u32 {
        self.client.read().config().default_page_size
    }

    /// Stores a pasted bearer token.
    pub fn sign_in(&mut self, raw_token: &str) -> Result<(), String> {
        let token =
            SessionToken::new(raw_token).ok_or_else(|| "Paste a token to continue.".to_string())?;
        self.session
            .read()
            .save_token(&token)
            .map_err(|error| format!("Could not store the token: {error}"))?;
        tracing::info!("Session token stored");
        self.signed_in.set(true);
        Ok(())
    }

    pub fn sign_out(&mut self) {
        if let Err(error) = self.session.read().clear_token() {
            tracing::warn!("Failed to clear session token: {}", error);
        }
        tracing::info!("Signed out");
        self.signed_in.set(false);
    }
}
