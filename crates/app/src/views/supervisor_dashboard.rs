use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Supervisor landing screen: a glance over sites, pairs and alerts.
#[component]
pub fn SupervisorDashboard() -> Element {
    let flags: FeatureFlags = use_context();

    rsx! {
        div { class: "screen supervisor-dashboard",
            h2 { "Overview" }

            div { class: "stat-grid",
                StatCard { label: "Sites active", value: "0" }
                StatCard { label: "Workers on shift", value: "0" }
                StatCard { label: "Open alerts", value: "0" }
            }

            Card {
                CardHeader {
                    CardTitle { "Live monitoring" }
                    if flags.real_time_monitoring {
                        CardDescription { "Check-ins stream in as they happen" }
                    } else {
                        CardDescription { "Live monitoring is disabled for this organization" }
                    }
                }
                CardContent {
                    Badge { variant: BadgeVariant::Outline, "No activity yet" }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: &'static str) -> Element {
    rsx! {
        Card {
            CardContent {
                span { class: "stat-value", "{value}" }
                span { class: "stat-label", "{label}" }
            }
        }
    }
}
