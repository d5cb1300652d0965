//! `window.sessionStorage` access.

use lobby_entry_core::{EntryError, SessionStore};

fn session_storage() -> Result<web_sys::Storage, EntryError> {
    let window = web_sys::window().ok_or_else(|| EntryError::Storage("no window".to_string()))?;
    window
        .session_storage()
        .ok()
        .flatten()
        .ok_or_else(|| EntryError::Storage("session storage unavailable".to_string()))
}

/// Session storage of the current tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        session_storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EntryError> {
        session_storage()?
            .set_item(key, value)
            .map_err(|e| EntryError::Storage(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_store_round_trip() {
        let store = BrowserSessionStore;
        store.set("lobby-entry-test/username", "Asha").unwrap();
        assert_eq!(store.get("lobby-entry-test/username").as_deref(), Some("Asha"));
    }

    #[wasm_bindgen_test]
    fn test_session_store_missing_key() {
        let store = BrowserSessionStore;
        assert!(store.get("lobby-entry-test/never-written").is_none());
    }
}
