use crate::auth::use_auth;
use crate::backend::AuthClient;
use dioxus::prelude::*;
use shared_types::{NewAccount, UserRole};
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

/// Registration form for a new employee account.
#[component]
pub fn EmployeeRegistration() -> Element {
    rsx! {
        RegistrationForm { role: UserRole::Employee }
    }
}

/// Registration form for a new supervisor account.
#[component]
pub fn SupervisorRegistration() -> Element {
    rsx! {
        RegistrationForm { role: UserRole::Supervisor }
    }
}

/// Registration form for a new administrator account.
#[component]
pub fn AdminRegistration() -> Element {
    rsx! {
        RegistrationForm { role: UserRole::Admin }
    }
}

#[component]
fn RegistrationForm(role: UserRole) -> Element {
    let mut auth = use_auth();
    let client = use_context::<AuthClient>();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        let client = client.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            let account = NewAccount {
                username: username(),
                password: password(),
                first_name: first_name(),
                last_name: last_name(),
                role,
            };
            match client.register(account).await {
                Ok(session) => auth.set_user(session),
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
            loading.set(false);
        }
    };

    rsx! {
        div { class: "register-view",
            Card {
                CardHeader {
                    CardTitle { "Register as {role.display_name().to_lowercase()}" }
                    CardDescription { "Your account is ready right after sign-up" }
                }
                CardContent {
                    form { onsubmit: handle_register,
                        Input {
                            label: "First name",
                            value: first_name(),
                            on_input: move |evt: FormEvent| first_name.set(evt.value()),
                        }
                        Input {
                            label: "Last name",
                            value: last_name(),
                            on_input: move |evt: FormEvent| last_name.set(evt.value()),
                        }
                        Input {
                            label: "Username",
                            value: username(),
                            on_input: move |evt: FormEvent| username.set(evt.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            hint: "At least 6 characters",
                            value: password(),
                            on_input: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(msg) = error_msg() {
                            p { class: "form-error", "{msg}" }
                        }
                        Button { disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }
            }
        }
    }
}
