use dioxus::prelude::*;
use shared_ui::theme::{ThemeMode, ThemeState};

mod auth;
mod backend;
mod config;
mod layout;
mod nav;
mod views;

use auth::{use_auth, AuthState};
use backend::AuthClient;
use nav::UiState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Configuration is fixed at startup; everything below reads it via context.
    let config = config::app_config();
    use_context_provider(|| config.features.clone());
    use_context_provider(|| config.limits.clone());

    let client = use_context_provider(|| AuthClient::from_config(&config.backend));
    use_context_provider(AuthState::new);
    use_context_provider(|| Signal::new(UiState::default()));
    let theme = use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::Light),
    });

    // Seed the persisted theme before any toggle runs.
    use_future(move || {
        let mut theme = theme;
        async move { theme.restore().await }
    });

    // Restore an existing session from the active backend, once.
    let mut auth = use_auth();
    use_future(move || {
        let client = client.clone();
        async move {
            match client.current_user().await {
                Ok(Some(session)) => auth.set_user(session),
                Ok(None) => {}
                Err(err) => tracing::warn!("session restore failed: {err}"),
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        layout::AppShell {}
    }
}
