//! Layout wrapping every route: header, sign-out, and the login redirect

use dioxus::prelude::*;

use crate::components::{ButtonVariant, UiButton};
use crate::route::Route;
use crate::state::AppState;

#[component]
pub fn Shell() -> Element {
    let mut app = use_context::<AppState>();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let signed_in = (app.signed_in)();
    let needs_login = !signed_in && !matches!(route, Route::Login {} | Route::NotFound { .. });

    use_effect(use_reactive(&needs_login, move |needs_login| {
        if needs_login {
            tracing::debug!("No session token, redirecting to login");
            navigator.replace(Route::Login {});
        }
    }));

    rsx! {
        div {
            style: "min-height: 100vh;",
            header {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 16px;
                    padding: 12px 24px;
                    background: #ffffff;
                    border-bottom: 1px solid #e5e7eb;
                ",
                h1 {
                    style: "margin: 0; font-size: 18px;",
                    Link { to: Route::NoteList {}, class: "brand-link", "Notes" }
                }
                if signed_in {
                    Link { to: Route::QuickEdit {}, class: "row-link", "Quick edit" }
                    UiButton {
                        r#type: "button",
                        variant: ButtonVariant::Ghost,
                        style: "margin-left: auto;",
                        onclick: move |_| {
                            app.sign_out();
                            navigator.replace(Route::Login {});
                        },
                        "Sign out"
                    }
                }
            }
            main {
                style: "max-width: 960px; margin: 0 auto; padding: 16px 24px;",
                if !needs_login {
                    Outlet::<Route> {}
                }
            }
        }
    }
}
