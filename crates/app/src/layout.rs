use crate::auth::use_auth;
use crate::backend::AuthClient;
use crate::nav::{self, AuthView, Screen, UiState};
use crate::views::{
    AdminDashboard, AdminRegistration, EmployeeHome, EmployeeMap, EmployeeRegistration, Login,
    MobileNav, Profile, RoleSelection, SupervisorAlerts, SupervisorDashboard, SupervisorPairs,
    SupervisorRegistration, SupervisorSites,
};
use dioxus::prelude::*;

/// Chrome around the active screen: mobile header, content area, and the
/// bottom navigation when the resolution calls for it.
#[component]
pub fn AppShell() -> Element {
    let mut auth = use_auth();
    let client = use_context::<AuthClient>();
    let mut ui = use_context::<Signal<UiState>>();

    let session = auth.current_user.read().clone();
    let state = ui.read().clone();
    let resolution = nav::resolve(session.as_ref(), &state);

    if session.is_none() && state.auth_view == AuthView::Register && state.selected_role.is_none() {
        // Unreachable through the normal transitions; resolution degrades to
        // role selection, logged so the dead end is visible.
        tracing::warn!("registration view reached without a selected role");
    }

    let Some(session) = session else {
        let body = match resolution.screen {
            Screen::RoleSelection => rsx! { RoleSelection {} },
            Screen::EmployeeRegistration => rsx! { EmployeeRegistration {} },
            Screen::SupervisorRegistration => rsx! { SupervisorRegistration {} },
            Screen::AdminRegistration => rsx! { AdminRegistration {} },
            _ => rsx! { Login {} },
        };
        return rsx! {
            div { class: "auth-screen", {body} }
        };
    };

    let sign_out = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                if let Err(err) = client.logout().await {
                    tracing::warn!("logout failed: {err}");
                }
            });
            auth.clear_auth();
            ui.write().reset();
        }
    };

    let body = match resolution.screen {
        Screen::Map => rsx! { EmployeeMap {} },
        Screen::Dashboard => rsx! { SupervisorDashboard {} },
        Screen::Sites => rsx! { SupervisorSites {} },
        Screen::Pairs => rsx! { SupervisorPairs {} },
        Screen::Alerts => rsx! { SupervisorAlerts {} },
        Screen::AdminDashboard => rsx! { AdminDashboard {} },
        Screen::Profile => rsx! { Profile {} },
        _ => rsx! { EmployeeHome {} },
    };

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                div { class: "app-header-identity",
                    span { class: "app-brand", "ShiftWatch" }
                    h3 { class: "app-header-name", "{session.display_name()}" }
                }
                button { class: "sign-out", onclick: sign_out, "Sign Out" }
            }
            main { class: "app-main", {body} }
            if resolution.bottom_nav {
                MobileNav {}
            }
        }
    }
}
