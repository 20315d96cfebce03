use dioxus::prelude::*;
use shared_types::Limits;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Separator};

/// Organization-wide administration. Admins work from this single screen,
/// so there is no bottom navigation around it.
#[component]
pub fn AdminDashboard() -> Element {
    let limits: Limits = use_context();

    rsx! {
        div { class: "screen admin-dashboard",
            h2 { "Administration" }

            Card {
                CardHeader {
                    CardTitle { "Accounts" }
                    CardDescription { "Employees, supervisors and their assignments" }
                }
                CardContent {
                    p { class: "empty-state", "No accounts registered yet" }
                }
            }

            Separator {}

            Card {
                CardHeader {
                    CardTitle { "Organization policy" }
                }
                CardContent {
                    ul { class: "policy-list",
                        li { "Verification every {limits.verification_frequency_minutes} minutes" }
                        li { "Site radius {limits.site_radius_m} m" }
                        li { "At most {limits.max_check_ins_per_day} check-ins per worker per day" }
                    }
                }
            }
        }
    }
}
