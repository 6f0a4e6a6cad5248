use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        h2 { "Page not found" }
        p { style: "color: #6b7280;", "Nothing lives at /{path}." }
        Link { to: Route::NoteList {}, "Back to notes" }
    }
}
