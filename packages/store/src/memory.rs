use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap()
            .clone()
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let store = MemoryStore::new();
        assert_eq!(store.get(), None);

        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));

        store.set("replaced");
        assert_eq!(store.get(), Some("replaced".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let store = MemoryStore::new();
        store.set("");
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("shared");
        assert_eq!(other.get(), Some("shared".to_string()));

        other.clear();
        assert_eq!(store.get(), None);
    }
}
