//! Persistent storage for the single bearer token.
//!
//! The client holds exactly one process-wide token: created by a successful
//! login or signup, destroyed on logout or when the server rejects it.
//! There is no local expiry tracking — expiry is only ever detected by a
//! failed authenticated request.

/// Storage for the bearer token.
///
/// An empty stored value is treated the same as no value: [`TokenStore::get`]
/// never returns `Some("")`.
pub trait TokenStore {
    /// The current token, if one is held.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn set(&self, token: &str);

    /// Remove the persisted token.
    fn clear(&self);
}
