//! View state records.
//!
//! Each view keeps its state in one immutable record; user actions and
//! request completions are explicit transitions that consume the record and
//! return the next one. I/O stays in the views: a transition only says which
//! call to make, and the view reports the outcome back with another transition.

mod detail;
mod form;
mod list;

use std::collections::BTreeMap;

pub use detail::DetailState;
pub use form::{FormMode, FormState};
pub use list::{InlineDraft, ListState};

use crate::error::ApiError;
use crate::models::{NoteDraft, NoteId};

/// Monotonic id stamped on each fetch; only the most recently issued one is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[must_use]
    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Whether a completed fetch was applied to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer fetch was issued in the meantime; the result was dropped.
    Stale,
    /// The page came back empty past the end; the page index was stepped back
    /// and another fetch requested.
    Reclamped,
}

/// The API call a submit transition asks the view to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(NoteDraft),
    Update(NoteId, NoteDraft),
}

/// Split a failed submission into per-field messages and a banner message.
///
/// Field messages replace the banner only when every named field is one the
/// form renders; otherwise the whole error also becomes a banner.
fn submission_failure(error: &ApiError) -> (BTreeMap<String, String>, Option<String>) {
    match error.field_errors() {
        Some(fields) if fields.keys().all(|field| FORM_FIELDS.contains(&field.as_str())) => {
            (fields.clone(), None)
        }
        Some(fields) => (fields.clone(), Some(error.user_message())),
        None => (BTreeMap::new(), Some(error.user_message())),
    }
}

const FORM_FIELDS: [&str; 2] = ["title", "content"];
