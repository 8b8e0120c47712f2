//! # localStorage token store — browser-side persistence
//!
//! [`LocalStore`] is the [`TokenStore`] implementation used on the **web
//! platform**. It persists the bearer token under a single well-known
//! localStorage key, so a page reload with a valid token lands straight in
//! the app without re-authenticating.
//!
//! ## Error handling
//!
//! All trait methods silently swallow browser errors (returning `None` for
//! reads, doing nothing for writes). An unavailable or blocked localStorage
//! degrades to "no persisted token" and the user is asked to sign in again,
//! rather than crashing the client.

use crate::token::TokenStore;
use web_sys::Storage;

const TOKEN_KEY: &str = "tana.token";

/// localStorage-backed TokenStore for the web platform.
///
/// Zero-size and `Clone`-friendly: the storage handle is re-acquired from the
/// window on every operation, which the browser makes cheap.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStore {
    fn get(&self) -> Option<String> {
        let value = Self::storage()?.get_item(TOKEN_KEY).ok()??;
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
