//! Platform-appropriate token store constructor.
//!
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::LocalStore`]
//! - **Native** (tests, desktop shells): in-memory via [`store::MemoryStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStore;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformTokenStore = store::MemoryStore;

/// The one API client type the UI works with.
pub type TanaApi = api::ApiClient<PlatformTokenStore>;

pub fn make_token_store() -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}
