//! Auth screen: login and signup forms.
//!
//! Both forms follow the same shape: one unauthenticated POST, then persist
//! the returned token and run the initial refresh. A failed POST sets a
//! generic status line and leaves the mode untouched, so a rejected signup
//! (e.g. an already-registered email) never reaches the app screen.

use dioxus::prelude::*;

use api::{LoginRequest, Purpose, SignupRequest};

use crate::platform::TanaApi;
use crate::session::establish_session;
use crate::state::{parse_age, AppState, Notice};
use crate::status::{Status, StatusLine};
use crate::{use_api, use_app_state};

/// Shared tail of both auth flows: persist the fresh token, then run the
/// initial refresh. A failed refresh means the token is already unusable,
/// so [`establish_session`] has dropped it again by the time this reports.
async fn finish_auth(api: &TanaApi, mut state: Signal<AppState>, token: &str) {
    match establish_session(api, token).await {
        Ok(snapshot) => state.write().enter_app(snapshot),
        Err(e) => {
            tracing::warn!("initial refresh failed: {e}");
            state.write().sign_out(Some(Notice::SessionExpired));
        }
    }
}

#[component]
pub fn AuthScreen() -> Element {
    let mut state = use_app_state();
    let mut show_signup = use_signal(|| false);

    rsx! {
        div { class: "auth-screen",
            button {
                class: "link-button",
                onclick: move |_| state.write().back_home(),
                "← Back"
            }
            h1 { class: "brand", "TANA" }
            if let Some(notice) = state().notice {
                p { class: "notice-banner", "{notice.message()}" }
            }
            if show_signup() {
                SignupForm {}
            } else {
                LoginForm {}
            }
            button {
                class: "link-button",
                onclick: move |_| show_signup.toggle(),
                if show_signup() {
                    "Already have an account? Sign in"
                } else {
                    "New here? Create an account"
                }
            }
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let state = use_app_state();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(|| Option::<Status>::None);

    let submit_api = api.clone();
    let handle_login = move |_| {
        let api = submit_api.clone();
        async move {
            if email().trim().is_empty() || password().is_empty() {
                status.set(Some(Status::Error("Enter your email and password.")));
                return;
            }
            status.set(Some(Status::Pending("Signing in...")));
            let req = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match api.login(&req).await {
                Ok(resp) => {
                    tracing::info!("signed in");
                    finish_auth(&api, state, &resp.token).await;
                }
                Err(e) => {
                    tracing::warn!("login failed: {e}");
                    status.set(Some(Status::Error(
                        "Sign-in failed. Check your details and try again.",
                    )));
                }
            }
        }
    };

    rsx! {
        div { class: "auth-form",
            h2 { "Sign in" }
            input {
                class: "field",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                class: "field",
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            button { class: "cta", onclick: handle_login, "Sign in" }
            StatusLine { status: status() }
        }
    }
}

#[component]
fn SignupForm() -> Element {
    let state = use_app_state();
    let api = use_api();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut age_input = use_signal(String::new);
    let mut purpose = use_signal(|| Purpose::Growth);
    let mut status = use_signal(|| Option::<Status>::None);

    let submit_api = api.clone();
    let handle_signup = move |_| {
        let api = submit_api.clone();
        async move {
            if name().trim().is_empty() || email().trim().is_empty() || password().is_empty() {
                status.set(Some(Status::Error("Name, email and password are required.")));
                return;
            }
            status.set(Some(Status::Pending("Creating your account...")));
            let req = SignupRequest {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                age: parse_age(&age_input()),
                purpose: purpose(),
            };
            match api.signup(&req).await {
                Ok(resp) => {
                    tracing::info!("account created");
                    finish_auth(&api, state, &resp.token).await;
                }
                Err(e) => {
                    tracing::warn!("signup failed: {e}");
                    status.set(Some(Status::Error(
                        "Could not create the account. The email may already be registered.",
                    )));
                }
            }
        }
    };

    rsx! {
        div { class: "auth-form",
            h2 { "Create your account" }
            input {
                class: "field",
                r#type: "text",
                placeholder: "Name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            input {
                class: "field",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }
            input {
                class: "field",
                r#type: "password",
                placeholder: "Password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }
            input {
                class: "field",
                r#type: "number",
                min: "0",
                placeholder: "Age (optional)",
                value: age_input(),
                oninput: move |evt: FormEvent| age_input.set(evt.value()),
            }
            label { class: "field-label", "What brings you here?" }
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
            button { class: "cta", onclick: handle_signup, "Sign up" }
            StatusLine { status: status() }
        }
    }
}
