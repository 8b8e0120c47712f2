//! Dashboard section: greeting, pillar progress bars, session quota.
//!
//! Read-only — the aggregate is computed server-side. Percentages are
//! clamped into [0, 100] before they drive any bar width.

use dioxus::prelude::*;

use crate::use_app_state;

#[component]
pub fn DashboardSection() -> Element {
    let state = use_app_state();

    let Some(dashboard) = state().dashboard else {
        return rsx! {};
    };
    let p = dashboard.tana.percentages.clamped();

    rsx! {
        section { class: "panel",
            h2 { "Welcome back, {dashboard.name}" }
            div { class: "tana-bars",
                PillarBar { label: "Mind", value: p.mind }
                PillarBar { label: "Money", value: p.money }
                PillarBar { label: "Meaning", value: p.meaning }
            }
            p { class: "quota",
                "Sessions used: {dashboard.sessions.used} of {dashboard.sessions.total}"
            }
        }
    }
}

#[component]
fn PillarBar(label: &'static str, value: f32) -> Element {
    rsx! {
        div { class: "pillar-bar",
            span { class: "pillar-bar-label", "{label}" }
            div { class: "pillar-bar-track",
                div {
                    class: "pillar-bar-fill",
                    style: "width: {value}%",
                }
            }
            span { class: "pillar-bar-value", "{value:.0}%" }
        }
    }
}
