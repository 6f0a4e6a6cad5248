//! Title and content inputs shared by the inline draft and the form view

use dioxus::prelude::*;

use super::{FieldError, UiInput, UiTextarea};

#[component]
pub fn NoteFields(
    /// Prefix for element ids, unique per page
    id_prefix: &'static str,
    title: String,
    content: String,
    title_error: Option<String>,
    content_error: Option<String>,
    #[props(default)] disabled: bool,
    on_title: EventHandler<String>,
    on_content: EventHandler<String>,
) -> Element {
    let title_id = format!("{id_prefix}-title");
    let content_id = format!("{id_prefix}-content");

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px;",
            div {
                label {
                    r#for: "{title_id}",
                    style: "display: block; margin-bottom: 4px; font-size: 12px; color: #6b7280;",
                    "Title"
                }
                UiInput {
                    id: "{title_id}",
                    r#type: "text",
                    required: true,
                    disabled,
                    value: "{title}",
                    oninput: move |event: FormEvent| on_title.call(event.value()),
                }
                FieldError { message: title_error }
            }
            div {
                label {
                    r#for: "{content_id}",
                    style: "display: block; margin-bottom: 4px; font-size: 12px; color: #6b7280;",
                    "Content"
                }
                UiTextarea {
                    id: "{content_id}",
                    required: true,
                    disabled,
                    value: "{content}",
                    oninput: move |event: FormEvent| on_content.call(event.value()),
                }
                FieldError { message: content_error }
            }
        }
    }
}
