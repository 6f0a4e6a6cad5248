//! Routed views

mod detail;
mod form;
mod list;
mod login;
mod not_found;
mod shell;

pub use detail::NoteDetail;
pub use form::{NoteCreate, NoteEdit};
pub use list::{NoteList, QuickEdit};
pub use login::Login;
pub use not_found::NotFound;
pub use shell::Shell;

use notes_core::state::Submission;
use notes_core::{ApiError, Note, NotesClient};

use crate::state::AppState;

/// Performs the create or update a submit transition asked for.
async fn send_submission(client: &NotesClient, submission: &Submission) -> notes_core::Result<Note> {
    match submission {
        Submission::Create(draft) => client.create(draft).await,
        Submission::Update(id, draft) => client.update(id, draft).await,
    }
}

/// A refused credential ends the session; the shell then redirects to login.
fn end_session_if_refused(mut app: AppState, error: &ApiError) {
    if *error == ApiError::Unauthenticated && (app.signed_in)() {
        app.sign_out();
    }
}
