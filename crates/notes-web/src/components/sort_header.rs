//! Sortable table column header

use dioxus::prelude::*;

use notes_core::models::SortDirection;

#[component]
pub fn SortHeader(
    label: &'static str,
    /// Set when this column is the active sort column
    direction: Option<SortDirection>,
    onclick: EventHandler<()>,
) -> Element {
    let aria_sort = match direction {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    };
    let indicator = direction.map(SortDirection::indicator).unwrap_or_default();

    rsx! {
        th {
            "aria-sort": aria_sort,
            button {
                r#type: "button",
                title: "Sort by {label}",
                onclick: move |_| onclick.call(()),
                "{label} {indicator}"
            }
        }
    }
}
