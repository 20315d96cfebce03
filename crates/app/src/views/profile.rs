use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_ui::theme::{ThemeMode, ThemeState};
use shared_ui::{Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Label, Separator};

/// Account screen shared by every role: identity plus display preferences.
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let mut theme = use_context::<ThemeState>();

    let session = auth.current_user.read().clone();
    let Some(session) = session else {
        return rsx! {};
    };

    let mode = *theme.mode.read();

    rsx! {
        div { class: "screen profile",
            h2 { "Profile" }

            Card {
                CardHeader {
                    CardTitle { "{session.display_name()}" }
                }
                CardContent {
                    div { class: "profile-row",
                        Label { "Username" }
                        span { "{session.username}" }
                    }
                    div { class: "profile-row",
                        Label { "Role" }
                        Badge { "{session.role.display_name()}" }
                    }
                    if let Some(site) = session.site_id.clone() {
                        div { class: "profile-row",
                            Label { "Site" }
                            span { "{site}" }
                        }
                    }
                }
            }

            Separator {}

            Card {
                CardHeader {
                    CardTitle { "Display" }
                }
                CardContent {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            theme.mode.set(mode.toggled());
                            theme.apply();
                        },
                        if mode == ThemeMode::Dark { "Switch to light mode" } else { "Switch to dark mode" }
                    }
                }
            }
        }
    }
}
