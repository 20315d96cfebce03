pub mod admin_dashboard;
pub mod employee_home;
pub mod employee_map;
pub mod login;
pub mod mobile_nav;
pub mod profile;
pub mod register;
pub mod role_selection;
pub mod supervisor_alerts;
pub mod supervisor_dashboard;
pub mod supervisor_pairs;
pub mod supervisor_sites;

pub use admin_dashboard::AdminDashboard;
pub use employee_home::EmployeeHome;
pub use employee_map::EmployeeMap;
pub use login::Login;
pub use mobile_nav::MobileNav;
pub use profile::Profile;
pub use register::{AdminRegistration, EmployeeRegistration, SupervisorRegistration};
pub use role_selection::RoleSelection;
pub use supervisor_alerts::SupervisorAlerts;
pub use supervisor_dashboard::SupervisorDashboard;
pub use supervisor_pairs::SupervisorPairs;
pub use supervisor_sites::SupervisorSites;
