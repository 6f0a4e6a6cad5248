//! UI Components
//!
//! Reusable UI components for the browser application.

mod note_fields;
mod pagination;
mod sort_header;
mod ui;

pub use note_fields::NoteFields;
pub use pagination::Pagination;
pub use sort_header::SortHeader;
pub use ui::{
    ButtonVariant, ErrorBanner, FieldError, LoadingIndicator, UiButton, UiInput, UiTextarea,
    APP_STYLES,
};
