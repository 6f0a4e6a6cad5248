//! Client-side routes

use dioxus::prelude::*;

use notes_core::NoteId;

use crate::views::{Login, NoteCreate, NoteDetail, NoteEdit, NoteList, NotFound, QuickEdit, Shell};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        NoteList {},
        #[route("/notes")]
        QuickEdit {},
        #[route("/notes/new")]
        NoteCreate {},
        #[route("/notes/edit/:id")]
        NoteEdit { id: NoteId },
        #[route("/notes/:id")]
        NoteDetail { id: NoteId },
        #[route("/login")]
        Login {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
