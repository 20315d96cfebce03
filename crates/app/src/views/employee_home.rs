use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_types::{FeatureFlags, Limits};
use shared_ui::{Badge, BadgeVariant, Button, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Employee landing screen: shift status and the check-in action.
#[component]
pub fn EmployeeHome() -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let limits: Limits = use_context();

    let first_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|s| s.first_name.clone())
        .unwrap_or_default();
    let site = auth
        .current_user
        .read()
        .as_ref()
        .and_then(|s| s.site_id.clone());

    rsx! {
        div { class: "screen employee-home",
            h2 { "Hello, {first_name}" }

            Card {
                CardHeader {
                    CardTitle { "Today's shift" }
                    if let Some(site) = site {
                        CardDescription { "Assigned to site {site}" }
                    } else {
                        CardDescription { "No site assigned yet" }
                    }
                }
                CardContent {
                    Badge { variant: BadgeVariant::Secondary, "Not checked in" }
                    Button { "Check In" }
                }
            }

            if flags.face_recognition {
                Card {
                    CardHeader {
                        CardTitle { "Identity verification" }
                        CardDescription {
                            "You will be asked to verify every {limits.verification_frequency_minutes} minutes"
                        }
                    }
                }
            }
        }
    }
}
