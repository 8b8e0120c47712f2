//! Sessions section: the booking form, the paywall gate, and the list of
//! existing bookings.

use dioxus::prelude::*;

use api::{NewSessionRequest, SessionTopic};

use crate::app::refresh_all;
use crate::status::{Status, StatusLine};
use crate::{use_api, use_app_state};

/// The three plans shown once the included sessions are spent.
const TIERS: [(&str, &str); 3] = [
    ("Single Session", "$49"),
    ("Pack of Five", "$199"),
    ("Monthly Unlimited", "$399"),
];

/// Static reference the user quotes with a manual payment.
const PAYMENT_REFERENCE: &str = "TANA-PAY-0417";

#[component]
pub fn SessionsSection() -> Element {
    let state = use_app_state();
    let api = use_api();
    let mut topic = use_signal(|| SessionTopic::MindClarity);
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut status = use_signal(|| Option::<Status>::None);

    let paywalled = state().show_paywall();

    let book_api = api.clone();
    let handle_book = move |_| {
        let api = book_api.clone();
        async move {
            let Some(user_id) = state().user.as_ref().map(|u| u.id.clone()) else {
                return;
            };
            if date().is_empty() || time().is_empty() {
                status.set(Some(Status::Error("Pick a date and a time first.")));
                return;
            }
            status.set(Some(Status::Pending("Requesting your session...")));
            let req = NewSessionRequest::requested(user_id, topic(), date(), time());
            match api.create_session(&req).await {
                // Soft decline: quota spent, nothing was created. Keep the
                // token and the screen, just say so.
                Ok(created) if created.limited => {
                    status.set(Some(Status::Limited(
                        "You've used all your included sessions — see the plans below.",
                    )));
                }
                Ok(_) => {
                    status.set(Some(Status::Success(
                        "Session requested. You'll get a meeting link once a host confirms.",
                    )));
                    date.set(String::new());
                    time.set(String::new());
                    refresh_all(&api, state).await;
                }
                Err(e) => {
                    tracing::warn!("booking failed: {e}");
                    status.set(Some(Status::Error("Could not request the session. Try again.")));
                }
            }
        }
    };

    rsx! {
        section { class: "panel",
            h2 { "Book a session" }
            div { class: "booking-form",
                select {
                    class: "field",
                    value: topic().value(),
                    onchange: move |evt| {
                        if let Some(t) = SessionTopic::from_value(&evt.value()) {
                            topic.set(t);
                        }
                    },
                    for t in SessionTopic::ALL {
                        option { key: "{t.value()}", value: t.value(), "{t.label()}" }
                    }
                }
                input {
                    class: "field",
                    r#type: "date",
                    value: date(),
                    oninput: move |evt: FormEvent| date.set(evt.value()),
                }
                input {
                    class: "field",
                    r#type: "time",
                    value: time(),
                    oninput: move |evt: FormEvent| time.set(evt.value()),
                }
                // Disabled by the paywall gate alone; repeat submits are
                // last-write-wins, not de-duplicated.
                button {
                    class: "cta",
                    disabled: paywalled,
                    onclick: handle_book,
                    "Request session"
                }
                StatusLine { status: status() }
            }

            if paywalled {
                PaywallPanel {}
            }

            h3 { "Your sessions" }
            if state().sessions.is_empty() {
                p { class: "muted", "No sessions yet." }
            } else {
                ul { class: "session-list",
                    for session in state().sessions {
                        li { key: "{session.id}", class: "session-item",
                            span { class: "session-topic", "{session.topic.label()}" }
                            span { class: "session-when", "{session.date} at {session.time}" }
                            span { class: "session-status", "{session.status}" }
                            if let Some(url) = session.spatial_url {
                                a { class: "session-link", href: "{url}", target: "_blank", "Join" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Upsell panel shown while the paywall gate is up.
#[component]
fn PaywallPanel() -> Element {
    rsx! {
        div { class: "paywall",
            h3 { "You've used your included sessions" }
            p { "Pick a plan to keep booking:" }
            div { class: "tier-row",
                for (name, price) in TIERS {
                    div { key: "{name}", class: "tier",
                        h4 { "{name}" }
                        p { class: "tier-price", "{price}" }
                    }
                }
            }
            p { class: "muted", "Quote reference {PAYMENT_REFERENCE} with your payment." }
            // Manual confirmation only; nothing is sent to the backend yet
            button { class: "outline-button", "I've paid" }
        }
    }
}
