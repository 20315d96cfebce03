use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Worker pairs: the two-person teams this supervisor monitors.
#[component]
pub fn SupervisorPairs() -> Element {
    rsx! {
        div { class: "screen supervisor-pairs",
            h2 { "Worker pairs" }
            Card {
                CardHeader {
                    CardTitle { "Active pairs" }
                    CardDescription { "Pairs check in together and verify each other" }
                }
                CardContent {
                    p { class: "empty-state", "No pairs assigned yet" }
                }
            }
        }
    }
}
