//! Data models for Notes

mod note;
mod page;

pub use note::{Note, NoteDraft, NoteId, ParseNoteIdError};
pub use page::{
    Page, PageRequest, PageResponse, SortDirection, SortField, DEFAULT_PAGE_SIZE,
    PAGE_SIZE_OPTIONS,
};
