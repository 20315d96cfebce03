use dioxus::prelude::*;
use shared_types::Limits;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

#[component]
pub fn SupervisorSites() -> Element {
    let limits: Limits = use_context();

    rsx! {
        div { class: "screen supervisor-sites",
            h2 { "Sites" }
            Card {
                CardHeader {
                    CardTitle { "Your sites" }
                    CardDescription { "Geofence radius defaults to {limits.site_radius_m} m" }
                }
                CardContent {
                    p { class: "empty-state", "No sites registered yet" }
                }
            }
        }
    }
}
