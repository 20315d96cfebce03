//! View resolution: maps authentication state and the local navigation
//! selector to the screen to render and the chrome around it.

use shared_types::{Session, UserRole};

/// Which auth screen is showing while no session exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthView {
    #[default]
    Login,
    RoleSelect,
    Register,
}

/// Identifier of a renderable screen.
///
/// The rendering layer maps each value to a concrete screen component and
/// never re-inspects the session; the supervisor and admin dashboards are
/// therefore distinct values even though both sit behind the `"dashboard"`
/// selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    RoleSelection,
    EmployeeRegistration,
    SupervisorRegistration,
    AdminRegistration,
    Home,
    Map,
    Dashboard,
    Sites,
    Pairs,
    Alerts,
    AdminDashboard,
    Profile,
}

/// Transient client navigation state.
///
/// Created with defaults at startup, mutated only through the named
/// transitions below, and reset when a session ends. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub auth_view: AuthView,
    pub selected_role: Option<UserRole>,
    pub current_view: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            auth_view: AuthView::Login,
            selected_role: None,
            current_view: "home".into(),
        }
    }
}

impl UiState {
    /// Login → role selection. There is no reverse transition.
    pub fn switch_to_register(&mut self) {
        self.auth_view = AuthView::RoleSelect;
    }

    /// Role selection → registration form for `role`.
    ///
    /// The only transition into `Register`, so a registration view reached
    /// through the machine always has a selected role.
    pub fn select_role(&mut self, role: UserRole) {
        self.selected_role = Some(role);
        self.auth_view = AuthView::Register;
    }

    /// Bottom-nav tap: make `view` the active screen selector.
    pub fn navigate(&mut self, view: impl Into<String>) {
        self.current_view = view.into();
    }

    /// Back to defaults. Called explicitly when a session ends.
    pub fn reset(&mut self) {
        *self = UiState::default();
    }
}

/// Outcome of view resolution: the screen to render and whether the bottom
/// navigation chrome is shown around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub screen: Screen,
    pub bottom_nav: bool,
}

/// The view selector to resolve against, with the per-role default applied.
///
/// Non-employee sessions land on their dashboard instead of the employee
/// home. Derived at resolution time rather than written back into
/// [`UiState`], so resolution stays a pure function of its inputs.
pub fn effective_view(role: UserRole, current_view: &str) -> &str {
    if current_view == "home" && role != UserRole::Employee {
        "dashboard"
    } else {
        current_view
    }
}

/// Map authentication state and navigation state to a screen.
///
/// Total and pure: every input combination resolves to some screen, and
/// unknown view selectors degrade to the role's default screen rather than
/// failing. A `Register` view without a selected role is unreachable through
/// the transitions above; it degrades to role selection (see DESIGN.md).
pub fn resolve(session: Option<&Session>, ui: &UiState) -> Resolution {
    let Some(session) = session else {
        let screen = match (ui.auth_view, ui.selected_role) {
            (AuthView::Login, _) => Screen::Login,
            (AuthView::RoleSelect, _) => Screen::RoleSelection,
            (AuthView::Register, Some(UserRole::Employee)) => Screen::EmployeeRegistration,
            (AuthView::Register, Some(UserRole::Supervisor)) => Screen::SupervisorRegistration,
            (AuthView::Register, Some(UserRole::Admin)) => Screen::AdminRegistration,
            (AuthView::Register, None) => Screen::RoleSelection,
        };
        return Resolution {
            screen,
            bottom_nav: false,
        };
    };

    let view = effective_view(session.role, &ui.current_view);
    let screen = match session.role {
        UserRole::Employee => match view {
            "home" => Screen::Home,
            "map" => Screen::Map,
            "profile" => Screen::Profile,
            _ => Screen::Home,
        },
        UserRole::Supervisor => match view {
            "dashboard" => Screen::Dashboard,
            "sites" => Screen::Sites,
            "pairs" => Screen::Pairs,
            "alerts" => Screen::Alerts,
            "profile" => Screen::Profile,
            _ => Screen::Dashboard,
        },
        UserRole::Admin => match view {
            "profile" => Screen::Profile,
            _ => Screen::AdminDashboard,
        },
    };

    Resolution {
        screen,
        bottom_nav: session.role != UserRole::Admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn session(role: UserRole) -> Session {
        Session {
            id: Uuid::new_v4(),
            username: "worker".into(),
            first_name: "Alex".into(),
            last_name: "Rivera".into(),
            role,
            site_id: None,
        }
    }

    fn ui_with_view(view: &str) -> UiState {
        UiState {
            current_view: view.into(),
            ..UiState::default()
        }
    }

    #[test]
    fn defaults_are_login_no_role_home() {
        let ui = UiState::default();
        assert_eq!(ui.auth_view, AuthView::Login);
        assert_eq!(ui.selected_role, None);
        assert_eq!(ui.current_view, "home");
    }

    #[test]
    fn unauthenticated_login_resolves_to_login_without_chrome() {
        let ui = UiState::default();
        let res = resolve(None, &ui);
        assert_eq!(res.screen, Screen::Login);
        assert!(!res.bottom_nav);
    }

    #[test]
    fn switch_to_register_shows_role_selection() {
        let mut ui = UiState::default();
        ui.switch_to_register();
        assert_eq!(resolve(None, &ui).screen, Screen::RoleSelection);
    }

    #[test]
    fn select_role_resolves_to_matching_registration_screen() {
        let cases = [
            (UserRole::Employee, Screen::EmployeeRegistration),
            (UserRole::Supervisor, Screen::SupervisorRegistration),
            (UserRole::Admin, Screen::AdminRegistration),
        ];
        for (role, expected) in cases {
            let mut ui = UiState::default();
            ui.switch_to_register();
            ui.select_role(role);
            assert_eq!(resolve(None, &ui).screen, expected);
        }
    }

    #[test]
    fn select_role_always_sets_a_role_for_register() {
        let mut ui = UiState::default();
        ui.switch_to_register();
        ui.select_role(UserRole::Supervisor);
        assert_eq!(ui.auth_view, AuthView::Register);
        assert!(ui.selected_role.is_some());
    }

    #[test]
    fn register_without_role_degrades_to_role_selection() {
        // Unreachable through the transitions; the resolver still totalizes it.
        let ui = UiState {
            auth_view: AuthView::Register,
            selected_role: None,
            current_view: "home".into(),
        };
        assert_eq!(resolve(None, &ui).screen, Screen::RoleSelection);
    }

    #[test]
    fn employee_views_resolve_per_table() {
        let s = session(UserRole::Employee);
        assert_eq!(resolve(Some(&s), &ui_with_view("home")).screen, Screen::Home);
        assert_eq!(resolve(Some(&s), &ui_with_view("map")).screen, Screen::Map);
        assert_eq!(
            resolve(Some(&s), &ui_with_view("profile")).screen,
            Screen::Profile
        );
    }

    #[test]
    fn supervisor_views_resolve_per_table() {
        let s = session(UserRole::Supervisor);
        assert_eq!(
            resolve(Some(&s), &ui_with_view("dashboard")).screen,
            Screen::Dashboard
        );
        assert_eq!(resolve(Some(&s), &ui_with_view("sites")).screen, Screen::Sites);
        assert_eq!(resolve(Some(&s), &ui_with_view("pairs")).screen, Screen::Pairs);
        assert_eq!(
            resolve(Some(&s), &ui_with_view("alerts")).screen,
            Screen::Alerts
        );
        assert_eq!(
            resolve(Some(&s), &ui_with_view("profile")).screen,
            Screen::Profile
        );
    }

    #[test]
    fn admin_views_resolve_per_table() {
        let s = session(UserRole::Admin);
        assert_eq!(
            resolve(Some(&s), &ui_with_view("profile")).screen,
            Screen::Profile
        );
        for view in ["dashboard", "sites", "map", "anything"] {
            assert_eq!(
                resolve(Some(&s), &ui_with_view(view)).screen,
                Screen::AdminDashboard
            );
        }
    }

    #[test]
    fn unknown_views_degrade_to_role_default() {
        let cases = [
            (UserRole::Employee, Screen::Home),
            (UserRole::Supervisor, Screen::Dashboard),
            (UserRole::Admin, Screen::AdminDashboard),
        ];
        for (role, expected) in cases {
            let s = session(role);
            for view in ["", "settings", "bogus", "HOME"] {
                assert_eq!(resolve(Some(&s), &ui_with_view(view)).screen, expected);
            }
        }
    }

    #[test]
    fn home_substitutes_to_dashboard_for_non_employees() {
        for role in [UserRole::Supervisor, UserRole::Admin] {
            let s = session(role);
            let from_home = resolve(Some(&s), &ui_with_view("home"));
            let from_dashboard = resolve(Some(&s), &ui_with_view("dashboard"));
            assert_eq!(from_home, from_dashboard);
        }
    }

    #[test]
    fn effective_view_substitution_is_idempotent() {
        let once = effective_view(UserRole::Supervisor, "home");
        assert_eq!(once, "dashboard");
        assert_eq!(effective_view(UserRole::Supervisor, once), "dashboard");
        // Employees keep their home view untouched
        assert_eq!(effective_view(UserRole::Employee, "home"), "home");
    }

    #[test]
    fn bottom_nav_hidden_for_admin_only() {
        for view in ["home", "dashboard", "profile", "bogus"] {
            assert!(resolve(Some(&session(UserRole::Employee)), &ui_with_view(view)).bottom_nav);
            assert!(resolve(Some(&session(UserRole::Supervisor)), &ui_with_view(view)).bottom_nav);
            assert!(!resolve(Some(&session(UserRole::Admin)), &ui_with_view(view)).bottom_nav);
        }
    }

    #[test]
    fn employee_profile_keeps_chrome() {
        let s = session(UserRole::Employee);
        let res = resolve(Some(&s), &ui_with_view("profile"));
        assert_eq!(res.screen, Screen::Profile);
        assert!(res.bottom_nav);
    }

    #[test]
    fn admin_home_resolves_to_dashboard_without_chrome() {
        let s = session(UserRole::Admin);
        let res = resolve(Some(&s), &ui_with_view("home"));
        assert_eq!(res.screen, Screen::AdminDashboard);
        assert!(!res.bottom_nav);
    }

    #[test]
    fn navigate_replaces_current_view() {
        let mut ui = UiState::default();
        ui.navigate("alerts");
        assert_eq!(ui.current_view, "alerts");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut ui = UiState::default();
        ui.switch_to_register();
        ui.select_role(UserRole::Admin);
        ui.navigate("profile");
        ui.reset();
        assert_eq!(ui, UiState::default());
    }

    #[test]
    fn resolution_does_not_mutate_ui_state() {
        let s = session(UserRole::Supervisor);
        let ui = ui_with_view("home");
        let before = ui.clone();
        let _ = resolve(Some(&s), &ui);
        assert_eq!(ui, before);
    }
}
