//! # API crate — typed REST client for the TANA backend
//!
//! Everything the frontends need to talk to the backend over HTTP+JSON with
//! bearer-token authentication.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: request building, bearer headers, JSON decoding, per-call timeouts, and one typed wrapper per backend endpoint |
//! | [`error`] | [`ApiError`]: transport failure, non-2xx status (with raw body), timeout |
//! | [`models`] | Wire types: `User`, `Dashboard`, `Session`, `Reflection`, the closed `Purpose`/`Pillar`/`SessionTopic` sets, and request/response payloads |
//!
//! ## Backend contract
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | POST | `/auth/signup` | no |
//! | POST | `/auth/login` | no |
//! | GET | `/me` | yes |
//! | GET | `/dashboard` | yes |
//! | GET | `/sessions` | yes |
//! | POST | `/sessions` | yes |
//! | GET | `/reflections` | yes |
//! | POST | `/reflections` | yes |
//! | POST | `/profile` | yes |
//!
//! A single attempt per call: no retry, no backoff. Errors bubble to the
//! caller, which decides whether the session is still valid.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, REQUEST_TIMEOUT};
pub use error::ApiError;
pub use models::{
    Dashboard, ItemsResponse, LoginRequest, NewReflectionRequest, NewSessionRequest, Percentages,
    Pillar, ProfileUpdate, Purpose, Reflection, Session, SessionCreated, SessionQuota,
    SessionTopic, SignupRequest, TanaBreakdown, TokenResponse, User,
};

/// Backend base URL used when `TANA_API_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8787";

/// Resolve the backend base URL.
///
/// Read at compile time (`TANA_API_URL`) because the wasm build has no
/// runtime environment. Trailing slashes are stripped so paths can always
/// start with `/`.
pub fn base_url() -> String {
    option_env!("TANA_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}
