//! Landing screen: marketing copy and the way into the auth flow.

use dioxus::prelude::*;

use crate::use_app_state;

#[component]
pub fn HomeScreen() -> Element {
    let mut state = use_app_state();

    rsx! {
        div { class: "home",
            section { class: "hero",
                h1 { class: "brand", "TANA" }
                p { class: "tagline", "Coaching for mind, money and meaning." }
                p { class: "hero-copy",
                    "Track where you stand across the three pillars, book time with a host, "
                    "and keep a reflection journal along the way."
                }
                button {
                    class: "cta",
                    onclick: move |_| state.write().begin_auth(),
                    "Get Started"
                }
            }
            section { class: "pillars",
                PillarCard {
                    title: "Mind",
                    blurb: "Clarity sessions and daily reflections to quiet the noise.",
                }
                PillarCard {
                    title: "Money",
                    blurb: "Map your finances to your values instead of the other way round.",
                }
                PillarCard {
                    title: "Meaning",
                    blurb: "Find direction with a host who asks the uncomfortable questions.",
                }
            }
        }
    }
}

#[component]
fn PillarCard(title: &'static str, blurb: &'static str) -> Element {
    rsx! {
        div { class: "pillar-card",
            h3 { "{title}" }
            p { "{blurb}" }
        }
    }
}
