//! Paginated, sortable note list with an optional inline create/edit form.

use std::collections::BTreeMap;

use super::{submission_failure, FetchOutcome, FetchTicket, Submission};
use crate::error::ApiError;
use crate::models::{Note, NoteDraft, NoteId, Page, PageRequest, SortDirection, SortField};

/// Inline create/edit form seeded from the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineDraft {
    /// Note being edited; `None` while creating
    pub editing: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub field_errors: BTreeMap<String, String>,
}

impl InlineDraft {
    pub const fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn to_note_draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.clone(), self.content.clone())
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

/// State of the list view.
///
/// Previously fetched notes stay visible while a newer fetch is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    request: PageRequest,
    notes: Vec<Note>,
    total_elements: u64,
    total_pages: u32,
    loading: bool,
    error: Option<String>,
    allow_inline_edit: bool,
    draft: Option<InlineDraft>,
    saving: bool,
    deleting: Option<NoteId>,
    latest_ticket: FetchTicket,
    fetch_requested: bool,
}

impl ListState {
    /// Fresh state for a mounted list; the first fetch is already requested.
    pub fn new(page_size: u32, allow_inline_edit: bool) -> Self {
        Self {
            request: PageRequest {
                size: page_size.max(1),
                ..PageRequest::default()
            },
            notes: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            loading: false,
            error: None,
            allow_inline_edit,
            draft: None,
            saving: false,
            deleting: None,
            latest_ticket: FetchTicket::default(),
            fetch_requested: true,
        }
    }

    pub const fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True only for a page that loaded successfully and holds no notes.
    pub fn is_empty_page(&self) -> bool {
        self.notes.is_empty() && !self.loading && self.error.is_none()
    }

    pub const fn allow_inline_edit(&self) -> bool {
        self.allow_inline_edit
    }

    pub const fn draft(&self) -> Option<&InlineDraft> {
        self.draft.as_ref()
    }

    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    pub const fn deleting(&self) -> Option<&NoteId> {
        self.deleting.as_ref()
    }

    /// Whether a parameter change is waiting for `begin_fetch`.
    pub const fn needs_fetch(&self) -> bool {
        self.fetch_requested
    }

    pub const fn can_go_previous(&self) -> bool {
        !self.loading && self.request.page > 0
    }

    pub const fn can_go_next(&self) -> bool {
        !self.loading && self.total_pages > 0 && self.request.page + 1 < self.total_pages
    }

    pub fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            self.request.page + 1,
            self.total_pages.max(1)
        )
    }

    /// Sort direction of a column, if it is the active sort column.
    pub fn sort_direction(&self, field: SortField) -> Option<SortDirection> {
        (self.request.sort == field).then_some(self.request.direction)
    }

    // -- fetch lifecycle --------------------------------------------------

    /// Consumes a pending fetch request.
    ///
    /// Returns the ticket and parameters of the call to make, or `None` when
    /// nothing changed since the last fetch.
    #[must_use]
    pub fn begin_fetch(mut self) -> (Self, Option<(FetchTicket, PageRequest)>) {
        if !self.fetch_requested {
            return (self, None);
        }
        self.fetch_requested = false;
        self.latest_ticket = self.latest_ticket.next();
        self.loading = true;
        let call = (self.latest_ticket, self.request);
        (self, Some(call))
    }

    #[must_use]
    pub fn apply_page(mut self, ticket: FetchTicket, page: Page) -> (Self, FetchOutcome) {
        if ticket != self.latest_ticket {
            return (self, FetchOutcome::Stale);
        }
        self.loading = false;
        self.error = None;
        self.total_elements = page.total_elements;
        self.total_pages = page.total_pages;
        self.notes = page.notes;

        if self.notes.is_empty() && self.request.page > 0 && self.request.page >= self.total_pages
        {
            self.request.page = self.total_pages.saturating_sub(1);
            self.fetch_requested = true;
            return (self, FetchOutcome::Reclamped);
        }
        (self, FetchOutcome::Applied)
    }

    /// Records a failed fetch; the notes on screen are kept.
    #[must_use]
    pub fn apply_error(mut self, ticket: FetchTicket, error: &ApiError) -> (Self, FetchOutcome) {
        if ticket != self.latest_ticket {
            return (self, FetchOutcome::Stale);
        }
        self.loading = false;
        self.error = Some(error.user_message());
        (self, FetchOutcome::Applied)
    }

    /// Requests a re-fetch of the current page with unchanged parameters.
    #[must_use]
    pub fn reload(mut self) -> Self {
        self.fetch_requested = true;
        self
    }

    // -- sorting and pagination -------------------------------------------

    /// Clicking the active column flips the direction; any other column
    /// becomes active in ascending order. Both go back to the first page.
    #[must_use]
    pub fn toggle_sort(mut self, field: SortField) -> Self {
        if self.request.sort == field {
            self.request.direction = self.request.direction.toggled();
        } else {
            self.request.sort = field;
            self.request.direction = SortDirection::Asc;
        }
        self.request.page = 0;
        self.fetch_requested = true;
        self
    }

    /// Moves to `page`, clamped to `[0, total_pages - 1]`.
    #[must_use]
    pub fn go_to_page(mut self, page: u32) -> Self {
        let last = self.total_pages.saturating_sub(1);
        let target = page.min(last);
        if target != self.request.page {
            self.request.page = target;
            self.fetch_requested = true;
        }
        self
    }

    #[must_use]
    pub fn next_page(self) -> Self {
        let target = self.request.page.saturating_add(1);
        self.go_to_page(target)
    }

    #[must_use]
    pub fn previous_page(self) -> Self {
        let target = self.request.page.saturating_sub(1);
        self.go_to_page(target)
    }

    /// Changes the page length and returns to the first page.
    #[must_use]
    pub fn set_page_size(mut self, size: u32) -> Self {
        if size == 0 || size == self.request.size {
            return self;
        }
        self.request.size = size;
        self.request.page = 0;
        self.fetch_requested = true;
        self
    }

    // -- inline create/edit -----------------------------------------------

    #[must_use]
    pub fn start_create(mut self) -> Self {
        if self.allow_inline_edit && !self.saving {
            self.draft = Some(InlineDraft::default());
        }
        self
    }

    #[must_use]
    pub fn start_edit(mut self, note: &Note) -> Self {
        if self.allow_inline_edit && !self.saving {
            let NoteDraft { title, content } = note.to_draft();
            self.draft = Some(InlineDraft {
                editing: Some(note.id.clone()),
                title,
                content,
                field_errors: BTreeMap::new(),
            });
        }
        self
    }

    #[must_use]
    pub fn cancel_draft(mut self) -> Self {
        if !self.saving {
            self.draft = None;
        }
        self
    }

    #[must_use]
    pub fn set_draft_title(mut self, title: impl Into<String>) -> Self {
        if let Some(draft) = self.draft.as_mut() {
            draft.title = title.into();
            draft.field_errors.remove("title");
        }
        self
    }

    #[must_use]
    pub fn set_draft_content(mut self, content: impl Into<String>) -> Self {
        if let Some(draft) = self.draft.as_mut() {
            draft.content = content.into();
            draft.field_errors.remove("content");
        }
        self
    }

    /// Validates the inline draft and, if it is complete and no save is in
    /// flight, returns the call to make.
    #[must_use]
    pub fn begin_submit(mut self) -> (Self, Option<Submission>) {
        if self.saving {
            return (self, None);
        }
        let Some(draft) = self.draft.as_mut() else {
            return (self, None);
        };

        let payload = draft.to_note_draft();
        if let Err(errors) = payload.validate() {
            draft.field_errors = errors.fields;
            return (self, None);
        }
        draft.field_errors.clear();

        let submission = match &draft.editing {
            Some(id) => Submission::Update(id.clone(), payload),
            None => Submission::Create(payload),
        };
        self.saving = true;
        self.error = None;
        (self, Some(submission))
    }

    /// Clears the draft and re-fetches the current page.
    #[must_use]
    pub fn submit_succeeded(mut self) -> Self {
        self.saving = false;
        self.draft = None;
        self.fetch_requested = true;
        self
    }

    /// Keeps the draft and entered values, surfacing the error.
    #[must_use]
    pub fn submit_failed(mut self, error: &ApiError) -> Self {
        self.saving = false;
        let (fields, banner) = submission_failure(error);
        if let Some(draft) = self.draft.as_mut() {
            draft.field_errors = fields;
        }
        self.error = banner;
        self
    }

    // -- delete -----------------------------------------------------------

    /// Marks `id` as being deleted; returns `None` while another delete or a
    /// save is in flight.
    #[must_use]
    pub fn begin_delete(mut self, id: &NoteId) -> (Self, Option<NoteId>) {
        if self.deleting.is_some() || self.saving {
            return (self, None);
        }
        self.deleting = Some(id.clone());
        self.error = None;
        (self, Some(id.clone()))
    }

    /// Drops an inline draft of the deleted note and re-fetches the current page.
    #[must_use]
    pub fn delete_succeeded(mut self) -> Self {
        let deleted = self.deleting.take();
        if self
            .draft
            .as_ref()
            .is_some_and(|draft| draft.editing.is_some() && draft.editing == deleted)
        {
            self.draft = None;
        }
        self.fetch_requested = true;
        self
    }

    /// The notes on screen are left as they were, unless the note is already
    /// gone on the server; then the page is fetched again.
    #[must_use]
    pub fn delete_failed(mut self, error: &ApiError) -> Self {
        self.deleting = None;
        self.error = Some(error.user_message());
        if error.is_not_found() {
            self.fetch_requested = true;
        }
        self
    }
}
