//! notes-core - Core library for Notes
//!
//! This crate contains the shared models, the HTTP client for the remote notes
//! service, and the view-state records (with their transition functions) used
//! by the web client.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;

pub use api::NotesClient;
pub use error::{ApiError, Result};
pub use models::{Note, NoteDraft, NoteId, Page, PageRequest, SortDirection, SortField};
