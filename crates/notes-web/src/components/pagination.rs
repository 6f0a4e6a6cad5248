//! Previous/next controls, page indicator, and page-size selector

use dioxus::prelude::*;

use notes_core::models::PAGE_SIZE_OPTIONS;

use super::{ButtonVariant, UiButton};

#[component]
pub fn Pagination(
    label: String,
    can_previous: bool,
    can_next: bool,
    page_size: u32,
    #[props(default)] size_disabled: bool,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_page_size: EventHandler<u32>,
) -> Element {
    let sizes = page_size_choices(page_size);

    rsx! {
        nav {
            "aria-label": "Pagination",
            style: "display: flex; align-items: center; gap: 8px; margin-top: 12px;",
            UiButton {
                r#type: "button",
                variant: ButtonVariant::Outline,
                disabled: !can_previous,
                onclick: move |_| on_previous.call(()),
                "Previous"
            }
            span { style: "font-size: 13px; color: #374151;", "{label}" }
            UiButton {
                r#type: "button",
                variant: ButtonVariant::Outline,
                disabled: !can_next,
                onclick: move |_| on_next.call(()),
                "Next"
            }
            label {
                style: "margin-left: auto; font-size: 12px; color: #6b7280;",
                r#for: "page-size",
                "Per page"
            }
            select {
                id: "page-size",
                class: "ui-select",
                disabled: size_disabled,
                onchange: move |event: FormEvent| {
                    match event.value().parse::<u32>() {
                        Ok(size) => on_page_size.call(size),
                        Err(error) => tracing::warn!("Ignoring page size {:?}: {}", event.value(), error),
                    }
                },
                for size in sizes {
                    option {
                        key: "{size}",
                        value: "{size}",
                        selected: size == page_size,
                        "{size}"
                    }
                }
            }
        }
    }
}

/// Selectable sizes; a configured default outside the presets is offered too.
fn page_size_choices(current: u32) -> Vec<u32> {
    let mut sizes = PAGE_SIZE_OPTIONS.to_vec();
    if !sizes.contains(&current) {
        sizes.push(current);
        sizes.sort_unstable();
    }
    sizes
}
