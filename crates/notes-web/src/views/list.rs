//! Paginated note table

use dioxus::prelude::*;

use notes_core::models::SortField;
use notes_core::state::{FetchOutcome, ListState};
use notes_core::NoteId;

use super::{end_session_if_refused, send_submission};
use crate::components::{
    ButtonVariant, ErrorBanner, LoadingIndicator, NoteFields, Pagination, SortHeader, UiButton,
};
use crate::route::Route;
use crate::state::AppState;

/// Rows link to the detail and form views.
#[component]
pub fn NoteList() -> Element {
    rsx! { NoteListView { allow_inline_edit: false } }
}

/// Rows are created and edited in place.
#[component]
pub fn QuickEdit() -> Element {
    rsx! { NoteListView { allow_inline_edit: true } }
}

#[component]
pub fn NoteListView(allow_inline_edit: bool) -> Element {
    let app = use_context::<AppState>();
    let navigator = use_navigator();
    let mut list = use_signal(|| ListState::new(app.default_page_size(), allow_inline_edit));

    // One list call per parameter change; the ticket drops responses that
    // were overtaken by a newer call.
    use_effect(move || {
        if !(app.signed_in)() {
            return;
        }
        let (next, call) = list().begin_fetch();
        let Some((ticket, request)) = call else {
            return;
        };
        list.set(next);
        tracing::debug!(
            "Fetching page {} (size {}, {} {})",
            request.page,
            request.size,
            request.sort,
            request.direction
        );

        let client = app.client();
        spawn(async move {
            let result = client.list(&request).await;
            let (next, outcome) = match &result {
                Ok(page) => list().apply_page(ticket, page.clone()),
                Err(error) => list().apply_error(ticket, error),
            };
            match outcome {
                FetchOutcome::Stale => tracing::debug!("Dropped stale page {}", request.page),
                FetchOutcome::Reclamped => {
                    tracing::debug!("Page {} is past the end, stepping back", request.page);
                }
                FetchOutcome::Applied => {}
            }
            list.set(next);
            if let Err(error) = &result {
                end_session_if_refused(app, error);
            }
        });
    });

    let on_submit_draft = move |event: FormEvent| {
        event.prevent_default();
        let (next, submission) = list().begin_submit();
        list.set(next);
        let Some(submission) = submission else {
            return;
        };

        let client = app.client();
        spawn(async move {
            match send_submission(&client, &submission).await {
                Ok(note) => {
                    tracing::debug!("Saved note {} from the list", note.id);
                    list.set(list().submit_succeeded());
                }
                Err(error) => {
                    list.set(list().submit_failed(&error));
                    end_session_if_refused(app, &error);
                }
            }
        });
    };

    let mut on_delete = move |id: NoteId| {
        let (next, target) = list().begin_delete(&id);
        list.set(next);
        let Some(target) = target else {
            return;
        };

        let client = app.client();
        spawn(async move {
            match client.delete(&target).await {
                Ok(()) => list.set(list().delete_succeeded()),
                Err(error) => {
                    list.set(list().delete_failed(&error));
                    end_session_if_refused(app, &error);
                }
            }
        });
    };

    let state = list();
    let request = *state.request();
    let draft = state.draft().cloned();
    let loading = state.is_loading();
    let saving = state.is_saving();
    let deleting = state.deleting().cloned();
    let total = state.total_elements();

    rsx! {
        section {
            div {
                style: "display: flex; align-items: center; gap: 8px; margin-bottom: 12px;",
                h2 { style: "margin: 0; font-size: 20px;", "Notes" }
                span {
                    style: "font-size: 13px; color: #6b7280;",
                    "{total} total"
                }
                div {
                    style: "margin-left: auto; display: flex; gap: 8px;",
                    UiButton {
                        r#type: "button",
                        variant: ButtonVariant::Outline,
                        disabled: loading,
                        onclick: move |_| list.set(list().reload()),
                        "Refresh"
                    }
                    if allow_inline_edit {
                        UiButton {
                            r#type: "button",
                            disabled: saving,
                            onclick: move |_| list.set(list().start_create()),
                            "Add"
                        }
                    } else {
                        UiButton {
                            r#type: "button",
                            onclick: move |_| {
                                navigator.push(Route::NoteCreate {});
                            },
                            "New note"
                        }
                    }
                }
            }

            ErrorBanner { message: state.error().map(str::to_string) }

            if let Some(draft) = draft {
                form {
                    onsubmit: on_submit_draft,
                    style: "
                        margin-bottom: 16px;
                        padding: 12px;
                        background: #ffffff;
                        border: 1px solid #e5e7eb;
                        border-radius: 8px;
                    ",
                    h3 {
                        style: "margin: 0 0 8px 0; font-size: 15px;",
                        if draft.is_editing() { "Edit note" } else { "New note" }
                    }
                    NoteFields {
                        id_prefix: "inline-note",
                        title: draft.title.clone(),
                        content: draft.content.clone(),
                        title_error: draft.field_error("title").map(str::to_string),
                        content_error: draft.field_error("content").map(str::to_string),
                        disabled: saving,
                        on_title: move |title: String| list.set(list().set_draft_title(title)),
                        on_content: move |content: String| list.set(list().set_draft_content(content)),
                    }
                    div {
                        style: "display: flex; gap: 8px; margin-top: 10px;",
                        UiButton {
                            r#type: "submit",
                            disabled: saving || !draft.to_note_draft().is_complete(),
                            if saving { "Saving..." } else { "Save" }
                        }
                        UiButton {
                            r#type: "button",
                            variant: ButtonVariant::Ghost,
                            disabled: saving,
                            onclick: move |_| list.set(list().cancel_draft()),
                            "Cancel"
                        }
                    }
                }
            }

            if loading {
                LoadingIndicator { label: "Loading notes..." }
            }

            table {
                class: "notes-table",
                "aria-busy": "{loading}",
                thead {
                    tr {
                        for field in SortField::ALL {
                            SortHeader {
                                key: "{field}",
                                label: field.label(),
                                direction: state.sort_direction(field),
                                onclick: move |()| list.set(list().toggle_sort(field)),
                            }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    if state.is_empty_page() {
                        tr {
                            td {
                                colspan: "5",
                                style: "text-align: center; color: #6b7280;",
                                "No notes yet."
                            }
                        }
                    }
                    for note in state.notes().iter().cloned() {
                        {
                            let edit_note = note.clone();
                            let delete_id = note.id.clone();
                            let is_deleting = deleting.as_ref() == Some(&note.id);
                            let preview = note.content_preview(80);
                            let created = note.created_label();

                            rsx! {
                                tr {
                                    key: "{note.id}",
                                    td { "{note.id}" }
                                    td {
                                        if allow_inline_edit {
                                            "{note.title}"
                                        } else {
                                            Link { to: Route::NoteDetail { id: note.id.clone() }, "{note.title}" }
                                        }
                                    }
                                    td { "{preview}" }
                                    td { style: "white-space: nowrap;", "{created}" }
                                    td {
                                        style: "white-space: nowrap;",
                                        if allow_inline_edit {
                                            UiButton {
                                                r#type: "button",
                                                variant: ButtonVariant::Outline,
                                                disabled: saving,
                                                onclick: move |_| list.set(list().start_edit(&edit_note)),
                                                "Edit"
                                            }
                                        } else {
                                            Link {
                                                to: Route::NoteEdit { id: note.id.clone() },
                                                class: "row-link",
                                                "Edit"
                                            }
                                        }
                                        UiButton {
                                            r#type: "button",
                                            variant: ButtonVariant::Danger,
                                            style: "margin-left: 6px;",
                                            disabled: deleting.is_some(),
                                            onclick: move |_| on_delete(delete_id.clone()),
                                            if is_deleting { "Deleting..." } else { "Delete" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                label: state.page_label(),
                can_previous: state.can_go_previous(),
                can_next: state.can_go_next(),
                page_size: request.size,
                size_disabled: loading,
                on_previous: move |()| list.set(list().previous_page()),
                on_next: move |()| list.set(list().next_page()),
                on_page_size: move |size: u32| list.set(list().set_page_size(size)),
            }
        }
    }
}
