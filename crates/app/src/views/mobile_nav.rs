use crate::auth::use_user_role;
use crate::nav::{self, UiState};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBriefcase, LdHouse, LdLayoutDashboard, LdMapPin, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::UserRole;

/// Bottom tab bar. The tab set depends on the session's role; admins never
/// see this component at all.
#[component]
pub fn MobileNav() -> Element {
    let role = use_user_role();

    rsx! {
        nav { class: "mobile-nav",
            if role == UserRole::Employee {
                NavItem {
                    view: "home",
                    label: "Home",
                    icon: rsx! { Icon::<LdHouse> { icon: LdHouse, width: 20, height: 20 } },
                }
                NavItem {
                    view: "map",
                    label: "Map",
                    icon: rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 } },
                }
            } else {
                NavItem {
                    view: "dashboard",
                    label: "Dashboard",
                    icon: rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 20, height: 20 } },
                }
                NavItem {
                    view: "sites",
                    label: "Sites",
                    icon: rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 20, height: 20 } },
                }
                NavItem {
                    view: "pairs",
                    label: "Pairs",
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                }
                NavItem {
                    view: "alerts",
                    label: "Alerts",
                    icon: rsx! { Icon::<LdBell> { icon: LdBell, width: 20, height: 20 } },
                }
            }
            NavItem {
                view: "profile",
                label: "Profile",
                icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 } },
            }
        }
    }
}

#[component]
fn NavItem(view: &'static str, label: &'static str, icon: Element) -> Element {
    let role = use_user_role();
    let mut ui = use_context::<Signal<UiState>>();
    let active = nav::effective_view(role, &ui.read().current_view) == view;

    rsx! {
        button {
            class: "nav-item",
            "data-active": active,
            onclick: move |_| ui.write().navigate(view),
            {icon}
            span { class: "nav-item-label", "{label}" }
        }
    }
}
