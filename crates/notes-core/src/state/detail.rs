//! Single-note detail view state.

use super::{FetchOutcome, FetchTicket};
use crate::error::ApiError;
use crate::models::{Note, NoteId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    id: NoteId,
    note: Option<Note>,
    loading: bool,
    error: Option<String>,
    not_found: bool,
    deleting: bool,
    latest_ticket: FetchTicket,
    fetch_requested: bool,
}

impl DetailState {
    pub fn new(id: NoteId) -> Self {
        Self {
            id,
            note: None,
            loading: false,
            error: None,
            not_found: false,
            deleting: false,
            latest_ticket: FetchTicket::default(),
            fetch_requested: true,
        }
    }

    pub const fn id(&self) -> &NoteId {
        &self.id
    }

    pub const fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn is_not_found(&self) -> bool {
        self.not_found
    }

    pub const fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub const fn can_delete(&self) -> bool {
        self.note.is_some() && !self.deleting
    }

    /// Points the view at another note; the old one is dropped from screen.
    #[must_use]
    pub fn with_id(self, id: NoteId) -> Self {
        if id == self.id {
            return self;
        }
        Self {
            latest_ticket: self.latest_ticket,
            ..Self::new(id)
        }
    }

    #[must_use]
    pub fn begin_fetch(mut self) -> (Self, Option<(FetchTicket, NoteId)>) {
        if !self.fetch_requested {
            return (self, None);
        }
        self.fetch_requested = false;
        self.latest_ticket = self.latest_ticket.next();
        self.loading = true;
        let call = (self.latest_ticket, self.id.clone());
        (self, Some(call))
    }

    #[must_use]
    pub fn apply_note(mut self, ticket: FetchTicket, note: Note) -> (Self, FetchOutcome) {
        if ticket != self.latest_ticket {
            return (self, FetchOutcome::Stale);
        }
        self.loading = false;
        self.error = None;
        self.not_found = false;
        self.note = Some(note);
        (self, FetchOutcome::Applied)
    }

    #[must_use]
    pub fn apply_error(mut self, ticket: FetchTicket, error: &ApiError) -> (Self, FetchOutcome) {
        if ticket != self.latest_ticket {
            return (self, FetchOutcome::Stale);
        }
        self.loading = false;
        self.not_found = error.is_not_found();
        self.error = Some(error.user_message());
        (self, FetchOutcome::Applied)
    }

    /// Returns the id to delete, or `None` while a delete is in flight or
    /// before the note has loaded.
    #[must_use]
    pub fn begin_delete(mut self) -> (Self, Option<NoteId>) {
        if !self.can_delete() {
            return (self, None);
        }
        self.deleting = true;
        self.error = None;
        let id = self.id.clone();
        (self, Some(id))
    }

    #[must_use]
    pub fn delete_succeeded(mut self) -> Self {
        self.deleting = false;
        self
    }

    /// Shows the error in place; the note stays on screen.
    #[must_use]
    pub fn delete_failed(mut self, error: &ApiError) -> Self {
        self.deleting = false;
        self.not_found = error.is_not_found();
        self.error = Some(error.user_message());
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;

    fn note(id: &str) -> Note {
        Note {
            id: NoteId::new(id),
            title: format!("Title {id}"),
            content: "Body".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn loaded(id: &str) -> DetailState {
        let (state, call) = DetailState::new(NoteId::new(id)).begin_fetch();
        let (state, _) = state.apply_note(call.unwrap().0, note(id));
        state
    }

    #[test]
    fn shows_loading_until_fetch_resolves() {
        let (state, call) = DetailState::new(NoteId::new("1")).begin_fetch();
        assert!(state.is_loading());
        assert!(state.note().is_none());

        let (ticket, id) = call.unwrap();
        assert_eq!(id, NoteId::new("1"));
        let (state, outcome) = state.apply_note(ticket, note("1"));
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(state.note().unwrap().title, "Title 1");
        assert!(!state.is_loading());
    }

    #[test]
    fn id_change_refetches_and_drops_stale_result() {
        let (state, first) = DetailState::new(NoteId::new("1")).begin_fetch();
        let state = state.with_id(NoteId::new("2"));
        assert!(state.note().is_none());

        let (state, second) = state.begin_fetch();
        let (second_ticket, second_id) = second.unwrap();
        assert_eq!(second_id, NoteId::new("2"));

        let (state, outcome) = state.apply_note(first.unwrap().0, note("1"));
        assert_eq!(outcome, FetchOutcome::Stale);
        let (state, _) = state.apply_note(second_ticket, note("2"));
        assert_eq!(state.note().unwrap().id, NoteId::new("2"));
    }

    #[test]
    fn same_id_does_not_refetch() {
        let state = loaded("1").with_id(NoteId::new("1"));
        let (_, call) = state.begin_fetch();
        assert!(call.is_none());
    }

    #[test]
    fn missing_note_is_flagged() {
        let (state, call) = DetailState::new(NoteId::new("9")).begin_fetch();
        let (state, _) = state.apply_error(call.unwrap().0, &ApiError::NotFound("9".to_string()));
        assert!(state.is_not_found());
        assert_eq!(state.error(), Some("This note no longer exists."));
        assert!(!state.can_delete());
    }

    #[test]
    fn delete_is_single_flight() {
        let (state, target) = loaded("1").begin_delete();
        assert_eq!(target, Some(NoteId::new("1")));
        assert!(state.is_deleting());

        let (state, again) = state.begin_delete();
        assert!(again.is_none());

        let state = state.delete_succeeded();
        assert!(!state.is_deleting());
    }

    #[test]
    fn failed_delete_keeps_note_and_shows_error() {
        let (state, _) = loaded("1").begin_delete();
        let state = state.delete_failed(&ApiError::Http {
            status: 500,
            body: String::new(),
        });
        assert!(state.note().is_some());
        assert!(state.error().is_some());
        assert!(state.can_delete());
    }
}
