//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use notes_core::auth::StoredCredentials;
use notes_core::NotesClient;

use crate::components::APP_STYLES;
use crate::config::load_client_config;
use crate::route::Route;
use crate::services::LocalStorageSessionStore;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> Element {
    let startup = use_hook(|| {
        let session = LocalStorageSessionStore::default();
        let credentials = Arc::new(StoredCredentials::new(session.clone()));
        NotesClient::new(load_client_config(), credentials).map(|client| (client, session))
    });

    let (client, session) = match startup {
        Ok(services) => services,
        Err(error) => {
            tracing::error!("Failed to initialize notes client: {}", error);
            let message = error.user_message();
            return rsx! {
                style { "{APP_STYLES}" }
                p {
                    role: "alert",
                    style: "padding: 24px; color: #991b1b;",
                    "{message}"
                }
            };
        }
    };

    use_context_provider(|| {
        let signed_in = client.is_authenticated();
        tracing::info!("Notes client ready (signed in: {})", signed_in);
        AppState {
            client: Signal::new(client),
            session: Signal::new(session),
            signed_in: Signal::new(signed_in),
        }
    });

    rsx! {
        style { "{APP_STYLES}" }
        Router::<Route> {}
    }
}
