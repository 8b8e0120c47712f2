//! Reflection journal: entry form plus the append-only list, newest first.

use dioxus::prelude::*;

use api::{NewReflectionRequest, Pillar};

use crate::app::refresh_all;
use crate::status::{Status, StatusLine};
use crate::{use_api, use_app_state};

#[component]
pub fn ReflectionsSection() -> Element {
    let state = use_app_state();
    let api = use_api();
    let mut pillar = use_signal(|| Pillar::Mind);
    let mut entry = use_signal(String::new);
    let mut mood = use_signal(String::new);
    let mut status = use_signal(|| Option::<Status>::None);

    let save_api = api.clone();
    let handle_add = move |_| {
        let api = save_api.clone();
        async move {
            let Some(user_id) = state().user.as_ref().map(|u| u.id.clone()) else {
                return;
            };
            if entry().trim().is_empty() {
                status.set(Some(Status::Error("Write something first.")));
                return;
            }
            status.set(Some(Status::Pending("Saving your reflection...")));
            let req = NewReflectionRequest {
                user_id,
                pillar: pillar(),
                entry_text: entry().trim().to_string(),
                mood: Some(mood().trim().to_string()).filter(|m| !m.is_empty()),
            };
            match api.create_reflection(&req).await {
                Ok(_) => {
                    status.set(Some(Status::Success("Reflection saved.")));
                    entry.set(String::new());
                    mood.set(String::new());
                    refresh_all(&api, state).await;
                }
                Err(e) => {
                    tracing::warn!("reflection save failed: {e}");
                    status.set(Some(Status::Error("Could not save the reflection. Try again.")));
                }
            }
        }
    };

    rsx! {
        section { class: "panel",
            h2 { "Reflection journal" }
            div { class: "reflection-form",
                select {
                    class: "field",
                    value: pillar().as_str(),
                    onchange: move |evt| {
                        if let Some(p) = Pillar::from_value(&evt.value()) {
                            pillar.set(p);
                        }
                    },
                    for p in Pillar::ALL {
                        option { key: "{p.as_str()}", value: p.as_str(), "{p.as_str()}" }
                    }
                }
                textarea {
                    class: "field",
                    rows: 4,
                    placeholder: "What's on your mind?",
                    value: entry(),
                    oninput: move |evt: FormEvent| entry.set(evt.value()),
                }
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Mood (optional)",
                    value: mood(),
                    oninput: move |evt: FormEvent| mood.set(evt.value()),
                }
                button { class: "cta", onclick: handle_add, "Add reflection" }
                StatusLine { status: status() }
            }

            if state().reflections.is_empty() {
                p { class: "muted", "No reflections yet. Start with one sentence." }
            } else {
                ul { class: "reflection-list",
                    for reflection in state().reflections.into_iter().rev() {
                        li { key: "{reflection.id}", class: "reflection-item",
                            span { class: "reflection-pillar", "{reflection.pillar.as_str()}" }
                            p { class: "reflection-text", "{reflection.entry_text}" }
                            if let Some(mood) = reflection.mood {
                                span { class: "reflection-mood", "{mood}" }
                            }
                            span { class: "reflection-when", "{reflection.created_at}" }
                        }
                    }
                }
            }
        }
    }
}
