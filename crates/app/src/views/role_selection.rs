use crate::nav::UiState;
use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Pick a role to register as. Each card advances the flow into the matching
/// registration form.
#[component]
pub fn RoleSelection() -> Element {
    rsx! {
        div { class: "role-selection-view",
            h2 { "Join ShiftWatch" }
            p { class: "auth-tagline", "Choose how you work" }

            RoleCard {
                role: UserRole::Employee,
                description: "Check in at your site and verify your shift",
            }
            RoleCard {
                role: UserRole::Supervisor,
                description: "Monitor sites, worker pairs and alerts",
            }
            RoleCard {
                role: UserRole::Admin,
                description: "Manage the organization and its accounts",
            }
        }
    }
}

#[component]
fn RoleCard(role: UserRole, description: String) -> Element {
    let mut ui = use_context::<Signal<UiState>>();

    rsx! {
        div {
            class: "role-card",
            onclick: move |_| ui.write().select_role(role),
            Card {
                CardHeader {
                    CardTitle { "{role.display_name()}" }
                    CardDescription { "{description}" }
                }
                CardContent {
                    span { class: "role-card-cta", "Register as {role.display_name().to_lowercase()}" }
                }
            }
        }
    }
}
