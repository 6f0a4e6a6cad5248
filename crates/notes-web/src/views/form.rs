//! Create and edit forms

use dioxus::prelude::*;

use notes_core::state::{FetchOutcome, FormMode, FormState};
use notes_core::NoteId;

use super::{end_session_if_refused, send_submission};
use crate::components::{ButtonVariant, ErrorBanner, LoadingIndicator, NoteFields, UiButton};
use crate::route::Route;
use crate::state::AppState;

#[component]
pub fn NoteCreate() -> Element {
    rsx! { NoteFormView { id: None } }
}

#[component]
pub fn NoteEdit(id: NoteId) -> Element {
    rsx! { NoteFormView { id: Some(id) } }
}

fn form_for(id: Option<NoteId>) -> FormState {
    id.map_or_else(FormState::create, FormState::edit)
}

fn mode_for(id: Option<&NoteId>) -> FormMode {
    id.map_or(FormMode::Create, |id| FormMode::Edit(id.clone()))
}

#[component]
pub fn NoteFormView(id: Option<NoteId>) -> Element {
    let app = use_context::<AppState>();
    let navigator = use_navigator();
    let mut form = use_signal(|| form_for(id.clone()));

    // Edit forms load the stored note first; a route change starts over.
    use_effect(use_reactive(&id, move |id| {
        if !(app.signed_in)() {
            return;
        }
        let current = form.peek().clone();
        let state = if *current.mode() == mode_for(id.as_ref()) {
            current
        } else {
            form_for(id)
        };
        let (next, call) = state.begin_load();
        let Some((ticket, id)) = call else {
            return;
        };
        form.set(next);
        tracing::debug!("Loading note {} for editing", id);

        let client = app.client();
        spawn(async move {
            let result = client.get(&id).await;
            let (next, outcome) = match &result {
                Ok(note) => form().apply_loaded(ticket, note),
                Err(error) => form().apply_load_error(ticket, error),
            };
            if outcome == FetchOutcome::Stale {
                tracing::debug!("Dropped stale load of note {}", id);
            }
            form.set(next);
            if let Err(error) = &result {
                end_session_if_refused(app, error);
            }
        });
    }));

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        let (next, submission) = form().begin_submit();
        form.set(next);
        let Some(submission) = submission else {
            return;
        };

        let client = app.client();
        spawn(async move {
            match send_submission(&client, &submission).await {
                Ok(note) => {
                    tracing::debug!("Saved note {}", note.id);
                    form.set(form().submit_succeeded());
                    navigator.push(Route::NoteList {});
                }
                Err(error) => {
                    form.set(form().submit_failed(&error));
                    end_session_if_refused(app, &error);
                }
            }
        });
    };

    let state = form();
    let saving = state.is_saving();
    let loading = state.is_loading();
    let heading = state.heading();

    rsx! {
        section {
            style: "max-width: 640px;",
            h2 { "{heading}" }
            ErrorBanner { message: state.error().map(str::to_string) }
            if loading {
                LoadingIndicator { label: "Loading note..." }
            }
            form {
                onsubmit: on_submit,
                NoteFields {
                    id_prefix: "note-form",
                    title: state.title().to_string(),
                    content: state.content().to_string(),
                    title_error: state.field_error("title").map(str::to_string),
                    content_error: state.field_error("content").map(str::to_string),
                    disabled: saving || loading,
                    on_title: move |title: String| form.set(form().set_title(title)),
                    on_content: move |content: String| form.set(form().set_content(content)),
                }
                div {
                    style: "display: flex; gap: 8px; margin-top: 12px;",
                    UiButton {
                        r#type: "submit",
                        disabled: !state.can_submit(),
                        if saving { "Saving..." } else { "Save" }
                    }
                    UiButton {
                        r#type: "button",
                        variant: ButtonVariant::Ghost,
                        disabled: saving,
                        onclick: move |_| {
                            navigator.push(Route::NoteList {});
                        },
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn route_id_selects_form_mode() {
        assert_eq!(*form_for(None).mode(), FormMode::Create);
        assert_eq!(
            *form_for(Some(NoteId::new("3"))).mode(),
            mode_for(Some(&NoteId::new("3")))
        );
        assert_eq!(form_for(Some(NoteId::new("3"))).heading(), "Edit Note");
    }
}
