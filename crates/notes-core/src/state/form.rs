//! Create/edit form state.

use std::collections::BTreeMap;

use super::{submission_failure, FetchOutcome, FetchTicket, Submission};
use crate::error::ApiError;
use crate::models::{Note, NoteDraft, NoteId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(NoteId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    mode: FormMode,
    title: String,
    content: String,
    field_errors: BTreeMap<String, String>,
    error: Option<String>,
    loading: bool,
    saving: bool,
    latest_ticket: FetchTicket,
    fetch_requested: bool,
}

impl FormState {
    /// Empty form for a new note.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            content: String::new(),
            field_errors: BTreeMap::new(),
            error: None,
            loading: false,
            saving: false,
            latest_ticket: FetchTicket::default(),
            fetch_requested: false,
        }
    }

    /// Form for an existing note; its fields are loaded first.
    pub fn edit(id: NoteId) -> Self {
        Self {
            mode: FormMode::Edit(id),
            fetch_requested: true,
            ..Self::create()
        }
    }

    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    pub const fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New Note",
            FormMode::Edit(_) => "Edit Note",
        }
    }

    /// Whether the Save button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.saving && !self.loading && self.draft().is_complete()
    }

    fn draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.clone(), self.content.clone())
    }

    /// Consumes the pending pre-populate request of an edit form.
    #[must_use]
    pub fn begin_load(mut self) -> (Self, Option<(FetchTicket, NoteId)>) {
        let pending = match &self.mode {
            FormMode::Edit(id) if self.fetch_requested => Some(id.clone()),
            _ => None,
        };
        let Some(id) = pending else {
            return (self, None);
        };
        self.fetch_requested = false;
        self.latest_ticket = self.latest_ticket.next();
        self.loading = true;
        let ticket = self.latest_ticket;
        (self, Some((ticket, id)))
    }

    #[must_use]
    pub fn apply_loaded(mut self, ticket: FetchTicket, note: &Note) -> (Self, FetchOutcome) {
        if ticket != self.latest_ticket {
            return (self, FetchOutcome::Stale);
        }
        self.loading = false;
        self.error = None;
        self.title.clone_from(&note.title);
        self.content.clone_from(&note.content);
        (self, FetchOutcome::Applied)
    }

    #[must_use]
    pub fn apply_load_error(mut self, ticket: FetchTicket, error: &ApiError) -> (Self, FetchOutcome) {
        if ticket != self.latest_ticket {
            return (self, FetchOutcome::Stale);
        }
        self.loading = false;
        self.error = Some(error.user_message());
        (self, FetchOutcome::Applied)
    }

    #[must_use]
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self.field_errors.remove("title");
        self
    }

    #[must_use]
    pub fn set_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.field_errors.remove("content");
        self
    }

    /// Returns the call to make, or `None` when a field is empty, a save is
    /// already in flight, or the edit form is still loading.
    #[must_use]
    pub fn begin_submit(mut self) -> (Self, Option<Submission>) {
        if self.saving || self.loading {
            return (self, None);
        }
        let draft = self.draft();
        if let Err(errors) = draft.validate() {
            self.field_errors = errors.fields;
            return (self, None);
        }

        self.field_errors.clear();
        self.error = None;
        self.saving = true;
        let submission = match &self.mode {
            FormMode::Create => Submission::Create(draft),
            FormMode::Edit(id) => Submission::Update(id.clone(), draft),
        };
        (self, Some(submission))
    }

    #[must_use]
    pub fn submit_succeeded(mut self) -> Self {
        self.saving = false;
        self
    }

    /// Entered values are preserved.
    #[must_use]
    pub fn submit_failed(mut self, error: &ApiError) -> Self {
        self.saving = false;
        let (fields, banner) = submission_failure(error);
        self.field_errors = fields;
        self.error = banner;
        self
    }
}
