//! Application context and hooks.
//!
//! [`TanaProvider`] owns the one [`AppState`] signal and the one API client,
//! provides both through context, and resumes a persisted session on mount.

use dioxus::prelude::*;

use crate::platform::{make_token_store, TanaApi};
use crate::session::fetch_snapshot;
use crate::state::{AppState, Notice};
use store::TokenStore;

/// The shared application state signal.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// The shared API client.
pub fn use_api() -> TanaApi {
    use_context::<TanaApi>()
}

/// Provider component wrapping the whole app.
///
/// On mount: if a token survived from a previous visit, go straight to the
/// app screen and refresh; if the refresh fails the token is stale, so it is
/// cleared and the auth screen shows a "session expired" notice. Without a
/// token the client starts at home.
#[component]
pub fn TanaProvider(children: Element) -> Element {
    let api = use_hook(|| TanaApi::new(api::base_url(), make_token_store()));
    let mut state = use_signal(AppState::default);

    use_context_provider(|| api.clone());
    use_context_provider(|| state);

    let resume = api.clone();
    let _ = use_resource(move || {
        let api = resume.clone();
        async move {
            if api.tokens().get().is_none() {
                return;
            }
            match fetch_snapshot(&api).await {
                Ok(snapshot) => {
                    tracing::info!("resumed persisted session");
                    state.write().enter_app(snapshot);
                }
                Err(e) => {
                    tracing::warn!("session resume failed: {e}");
                    api.tokens().clear();
                    state.write().sign_out(Some(Notice::SessionExpired));
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Re-fetch everything after a mutating call.
///
/// All-or-nothing: any failure invalidates the session — the token is
/// cleared and the client falls back to the auth screen.
pub async fn refresh_all(api: &TanaApi, mut state: Signal<AppState>) {
    match fetch_snapshot(api).await {
        Ok(snapshot) => state.write().apply_snapshot(snapshot),
        Err(e) => {
            tracing::warn!("refresh failed: {e}");
            api.tokens().clear();
            state.write().sign_out(Some(Notice::SessionExpired));
        }
    }
}
