//! The authenticated app screen: navbar plus stacked sections.

use dioxus::prelude::*;

use crate::session::log_out;
use crate::views::{DashboardSection, ProfileSection, ReflectionsSection, SessionsSection};
use crate::{use_api, use_app_state};

#[component]
pub fn AppShell() -> Element {
    let mut state = use_app_state();
    let api = use_api();

    let logout_api = api.clone();
    let handle_logout = move |_| {
        tracing::info!("logged out");
        log_out(logout_api.tokens(), &mut state.write());
    };

    let name = state()
        .user
        .map(|u| u.name)
        .unwrap_or_default();

    rsx! {
        div { class: "app-shell",
            header { class: "navbar",
                span { class: "brand", "TANA" }
                div { class: "navbar-right",
                    span { class: "navbar-user", "{name}" }
                    button { class: "link-button", onclick: handle_logout, "Log out" }
                }
            }
            main { class: "app-main",
                DashboardSection {}
                SessionsSection {}
                ReflectionsSection {}
                ProfileSection {}
            }
        }
    }
}
