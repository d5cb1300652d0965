//! Browser implementations of the entry context.

mod http;
mod navigation;
mod notice;
mod storage;

use lobby_entry_core::{
    CreatedRoom, EntryError, NavigationTarget, Navigator, Notifier, RoomApi, SessionStore,
};

use self::http::HttpRoomApi;
use navigation::BrowserNavigator;
use notice::AlertNotifier;
use storage::BrowserSessionStore;

/// Entry context backed by the real browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserContext {
    storage: BrowserSessionStore,
    navigator: BrowserNavigator,
    notifier: AlertNotifier,
    api: HttpRoomApi,
}

impl SessionStore for BrowserContext {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EntryError> {
        self.storage.set(key, value)
    }
}

impl Navigator for BrowserContext {
    fn navigate(&self, target: &NavigationTarget) {
        self.navigator.navigate(target);
    }
}

impl Notifier for BrowserContext {
    fn notify(&self, error: &EntryError) {
        self.notifier.notify(error);
    }

    fn focus_name_field(&self) {
        self.notifier.focus_name_field();
    }
}

impl RoomApi for BrowserContext {
    async fn create_room(&self, endpoint: &str) -> Result<CreatedRoom, EntryError> {
        self.api.create_room(endpoint).await
    }
}
