//! Profile editor, seeded from the profile fetched during refresh.

use dioxus::prelude::*;

use api::{ProfileUpdate, Purpose};

use crate::app::refresh_all;
use crate::state::parse_age;
use crate::status::{Status, StatusLine};
use crate::{use_api, use_app_state};

#[component]
pub fn ProfileSection() -> Element {
    let state = use_app_state();
    let api = use_api();

    let seed = state().user;
    let seed_name = seed.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let seed_age = seed
        .as_ref()
        .and_then(|u| u.age)
        .map(|a| a.to_string())
        .unwrap_or_default();
    let seed_purpose = seed.as_ref().map(|u| u.purpose).unwrap_or(Purpose::Growth);

    let mut name = use_signal(move || seed_name);
    let mut age_input = use_signal(move || seed_age);
    let mut purpose = use_signal(move || seed_purpose);
    let mut status = use_signal(|| Option::<Status>::None);

    let save_api = api.clone();
    let handle_save = move |_| {
        let api = save_api.clone();
        async move {
            if name().trim().is_empty() {
                status.set(Some(Status::Error("Name can't be empty.")));
                return;
            }
            status.set(Some(Status::Pending("Saving...")));
            let req = ProfileUpdate {
                name: name().trim().to_string(),
                purpose: purpose(),
                age: parse_age(&age_input()),
            };
            match api.update_profile(&req).await {
                Ok(_) => {
                    status.set(Some(Status::Success("Profile saved.")));
                    refresh_all(&api, state).await;
                }
                Err(e) => {
                    tracing::warn!("profile save failed: {e}");
                    status.set(Some(Status::Error("Could not save your profile. Try again.")));
                }
            }
        }
    };

    rsx! {
        section { class: "panel",
            h2 { "Your profile" }
            div { class: "profile-form",
                label { class: "field-label", "Name" }
                input {
                    class: "field",
                    r#type: "text",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                label { class: "field-label", "Age" }
                input {
                    class: "field",
                    r#type: "number",
                    min: "0",
                    placeholder: "Optional",
                    value: age_input(),
                    oninput: move |evt: FormEvent| age_input.set(evt.value()),
                }
                label { class: "field-label", "Purpose" }
                select {
                    class: "field",
                    value: purpose().as_str(),
                    onchange: move |evt| {
                        if let Some(p) = Purpose::from_value(&evt.value()) {
                            purpose.set(p);
                        }
                    },
                    for p in Purpose::ALL {
                        option { key: "{p.as_str()}", value: p.as_str(), "{p.as_str()}" }
                    }
                }
                button { class: "cta", onclick: handle_save, "Save profile" }
                StatusLine { status: status() }
            }
        }
    }
}
