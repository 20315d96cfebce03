use dioxus::prelude::*;
use shared_types::{FeatureFlags, Limits};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Site map for the signed-in employee.
#[component]
pub fn EmployeeMap() -> Element {
    let flags: FeatureFlags = use_context();
    let limits: Limits = use_context();

    rsx! {
        div { class: "screen employee-map",
            h2 { "Your site" }
            Card {
                CardHeader {
                    CardTitle { "Site map" }
                    CardDescription { "Check-in zone radius: {limits.site_radius_m} m" }
                }
                CardContent {
                    div { class: "map-placeholder",
                        if flags.geolocation {
                            p { "Locating you..." }
                        } else {
                            p { "Location services are disabled for this organization" }
                        }
                    }
                }
            }
        }
    }
}
