//! Token entry; issuing tokens is the identity provider's job

use dioxus::prelude::*;

use crate::components::{ButtonVariant, ErrorBanner, UiButton, UiInput};
use crate::route::Route;
use crate::state::AppState;

#[component]
pub fn Login() -> Element {
    let mut app = use_context::<AppState>();
    let navigator = use_navigator();
    let mut token = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        match app.sign_in(&token()) {
            Ok(()) => {
                token.set(String::new());
                error.set(None);
                navigator.replace(Route::NoteList {});
            }
            Err(message) => error.set(Some(message)),
        }
    };

    rsx! {
        section {
            style: "max-width: 420px; margin: 48px auto;",
            h2 { "Sign in" }
            p {
                style: "font-size: 13px; color: #6b7280;",
                "Paste the bearer token issued for the notes service."
            }
            ErrorBanner { message: error() }
            form {
                onsubmit: on_submit,
                style: "display: flex; flex-direction: column; gap: 10px;",
                label { r#for: "session-token", style: "font-size: 12px; color: #6b7280;", "Token" }
                UiInput {
                    id: "session-token",
                    r#type: "password",
                    autocomplete: "off",
                    required: true,
                    value: "{token}",
                    oninput: move |event: FormEvent| token.set(event.value()),
                }
                UiButton {
                    r#type: "submit",
                    variant: ButtonVariant::Primary,
                    disabled: token().trim().is_empty(),
                    "Continue"
                }
            }
        }
    }
}
