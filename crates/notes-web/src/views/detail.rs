//! Single note view

use dioxus::prelude::*;

use notes_core::state::{DetailState, FetchOutcome};
use notes_core::{Note, NoteId};

use super::end_session_if_refused;
use crate::components::{ButtonVariant, ErrorBanner, LoadingIndicator, UiButton};
use crate::route::Route;
use crate::state::AppState;

#[component]
pub fn NoteDetail(id: NoteId) -> Element {
    let app = use_context::<AppState>();
    let navigator = use_navigator();
    let mut detail = use_signal(|| DetailState::new(id.clone()));

    // Refetch whenever the route points at another note.
    use_effect(use_reactive(&id, move |id| {
        if !(app.signed_in)() {
            return;
        }
        let (next, call) = detail.peek().clone().with_id(id).begin_fetch();
        let Some((ticket, id)) = call else {
            return;
        };
        detail.set(next);
        tracing::debug!("Fetching note {}", id);

        let client = app.client();
        spawn(async move {
            let result = client.get(&id).await;
            let (next, outcome) = match &result {
                Ok(note) => detail().apply_note(ticket, note.clone()),
                Err(error) => detail().apply_error(ticket, error),
            };
            if outcome == FetchOutcome::Stale {
                tracing::debug!("Dropped stale response for note {}", id);
            }
            detail.set(next);
            if let Err(error) = &result {
                end_session_if_refused(app, error);
            }
        });
    }));

    let on_delete = move |_| {
        let (next, target) = detail().begin_delete();
        detail.set(next);
        let Some(target) = target else {
            return;
        };

        let client = app.client();
        spawn(async move {
            match client.delete(&target).await {
                Ok(()) => {
                    detail.set(detail().delete_succeeded());
                    navigator.push(Route::NoteList {});
                }
                Err(error) => {
                    detail.set(detail().delete_failed(&error));
                    end_session_if_refused(app, &error);
                }
            }
        });
    };

    let state = detail();
    let deleting = state.is_deleting();
    let can_delete = state.can_delete();
    let created = state.note().map(Note::created_label).unwrap_or_default();

    if state.is_not_found() {
        return rsx! {
            section {
                h2 { "Note not found" }
                p { style: "color: #6b7280;", "This note no longer exists." }
                Link { to: Route::NoteList {}, "Back to notes" }
            }
        };
    }

    rsx! {
        section {
            Link { to: Route::NoteList {}, class: "row-link", "← Back to notes" }
            ErrorBanner { message: state.error().map(str::to_string) }

            if let Some(note) = state.note() {
                article {
                    style: "
                        margin-top: 12px;
                        padding: 16px;
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 8px;
                    ",
                    h2 { style: "margin: 0 0 4px 0;", "{note.title}" }
                    p {
                        style: "margin: 0 0 12px 0; font-size: 12px; color: #6b7280;",
                        "Created {created}"
                    }
                    p { style: "white-space: pre-wrap; margin: 0;", "{note.content}" }
                    div {
                        style: "display: flex; gap: 8px; margin-top: 16px;",
                        UiButton {
                            r#type: "button",
                            variant: ButtonVariant::Outline,
                            disabled: deleting,
                            onclick: move |_| {
                                navigator.push(Route::NoteEdit { id: id.clone() });
                            },
                            "Edit"
                        }
                        UiButton {
                            r#type: "button",
                            variant: ButtonVariant::Danger,
                            disabled: !can_delete,
                            onclick: on_delete,
                            if deleting { "Deleting..." } else { "Delete" }
                        }
                    }
                }
            } else if state.is_loading() {
                LoadingIndicator { label: "Loading note..." }
            }
        }
    }
}
