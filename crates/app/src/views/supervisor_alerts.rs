use dioxus::prelude::*;
use shared_types::{FeatureFlags, Limits};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

#[component]
pub fn SupervisorAlerts() -> Element {
    let flags: FeatureFlags = use_context();
    let limits: Limits = use_context();

    rsx! {
        div { class: "screen supervisor-alerts",
            h2 { "Alerts" }
            Card {
                CardHeader {
                    CardTitle { "Open alerts" }
                    if flags.ai_alerts {
                        CardDescription {
                            "AI alerts fire above {limits.ai_confidence_threshold}% confidence"
                        }
                    } else {
                        CardDescription { "Manual alerts only" }
                    }
                }
                CardContent {
                    p { class: "empty-state", "Nothing needs your attention" }
                }
            }
        }
    }
}
