use crate::auth::use_auth;
use crate::backend::AuthClient;
use crate::nav::UiState;
use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

/// Sign-in screen with a switch into the registration flow.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let client = use_context::<AuthClient>();
    let mut ui = use_context::<Signal<UiState>>();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        let client = client.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            match client.login(&username(), &password()).await {
                Ok(session) => auth.set_user(session),
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
            loading.set(false);
        }
    };

    rsx! {
        div { class: "login-view",
            div { class: "auth-brand",
                span { class: "auth-brand-mark", "SW" }
                h1 { "ShiftWatch" }
                p { class: "auth-tagline", "Worker check-in and site monitoring" }
            }
            Card {
                CardHeader {
                    CardTitle { "Sign in" }
                    CardDescription { "Use your worker account" }
                }
                CardContent {
                    form { onsubmit: handle_login,
                        Input {
                            label: "Username",
                            placeholder: "username",
                            value: username(),
                            on_input: move |evt: FormEvent| username.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(msg) = error_msg() {
                            p { class: "form-error", "{msg}" }
                        }
                        Button { disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
            button {
                class: "link-button",
                onclick: move |_| ui.write().switch_to_register(),
                "Create an account"
            }
        }
    }
}
