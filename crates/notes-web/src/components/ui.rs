//! Shared UI primitives: buttons, inputs, and the page-level styles.

use dioxus::prelude::*;

/// Stylesheet injected once by the app shell.
pub const APP_STYLES: &str = r"
body {
    margin: 0;
    font-family: system-ui, -apple-system, sans-serif;
    background: #f9fafb;
    color: #111827;
}

.ui-button {
    border-radius: 8px;
    padding: 8px 12px;
    font-size: 13px;
    font-weight: 600;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background-color 120ms ease, color 120ms ease, border-color 120ms ease;
}

.ui-button:disabled {
    opacity: 0.55;
    cursor: default;
}

.ui-button--primary {
    background: #2563eb;
    color: #ffffff;
    border-color: #2563eb;
}

.ui-button--outline {
    background: #ffffff;
    color: #374151;
    border-color: #d1d5db;
}

.ui-button--ghost {
    background: transparent;
    color: #374151;
    border-color: transparent;
}

.ui-button--danger {
    background: #dc2626;
    color: #ffffff;
    border-color: #dc2626;
}

.ui-input,
.ui-textarea,
.ui-select {
    width: 100%;
    box-sizing: border-box;
    border: 1px solid #d1d5db;
    border-radius: 8px;
    padding: 8px 10px;
    font-size: 13px;
    background: #ffffff;
    color: #111827;
}

.ui-select {
    width: auto;
}

.ui-textarea {
    min-height: 120px;
    resize: vertical;
}

.ui-field-error {
    margin: 4px 0 0 0;
    font-size: 12px;
    color: #b91c1c;
}

.brand-link {
    color: inherit;
    text-decoration: none;
}

.row-link {
    margin-right: 8px;
    font-size: 13px;
    color: #2563eb;
}

.notes-table {
    width: 100%;
    border-collapse: collapse;
    background: #ffffff;
}

.notes-table th,
.notes-table td {
    text-align: left;
    padding: 8px 10px;
    border-bottom: 1px solid #e5e7eb;
    font-size: 13px;
    vertical-align: top;
}

.notes-table th button {
    font: inherit;
    font-weight: 600;
    background: none;
    border: none;
    padding: 0;
    cursor: pointer;
    color: inherit;
}
";

/// Button variant mapping.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    const fn class(self) -> &'static str {
        match self {
            Self::Primary => "ui-button--primary",
            Self::Outline => "ui-button--outline",
            Self::Ghost => "ui-button--ghost",
            Self::Danger => "ui-button--danger",
        }
    }
}

#[component]
pub fn UiButton(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let class_name = format!("ui-button {}", variant.class());

    rsx! {
        button {
            class: "{class_name}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn UiInput(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "ui-input",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

#[component]
pub fn UiTextarea(
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = textarea)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        textarea {
            class: "ui-textarea",
            oninput: move |event| _ = oninput.map(|handler| handler(event)),
            ..attributes,
        }
    }
}

/// Message shown under an input when the field was rejected.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            p { class: "ui-field-error", role: "alert", "{message}" }
        }
    }
}

/// Error region for request failures.
#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    rsx! {
        if let Some(message) = message {
            div {
                role: "alert",
                style: "
                    margin: 12px 0;
                    padding: 10px 12px;
                    border: 1px solid #fecaca;
                    border-radius: 8px;
                    background: #fef2f2;
                    color: #991b1b;
                    font-size: 13px;
                ",
                "{message}"
            }
        }
    }
}

#[component]
pub fn LoadingIndicator(label: String) -> Element {
    rsx! {
        p {
            "aria-busy": "true",
            style: "margin: 8px 0; font-size: 13px; color: #6b7280;",
            "{label}"
        }
    }
}
