//! Seams between the controller and the browser.
//!
//! The WASM client implements these over `web-sys`; tests implement them in
//! memory. Futures are not `Send` because everything runs on the browser's
//! event loop.

use std::future::Future;

use crate::error::EntryError;
use crate::link::{CreatedRoom, NavigationTarget};

/// Tab-scoped key-value storage.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), EntryError>;
}

/// Leaves the entry page.
pub trait Navigator {
    fn navigate(&self, target: &NavigationTarget);
}

/// User-facing feedback.
pub trait Notifier {
    /// Show a blocking notice for `error`.
    fn notify(&self, error: &EntryError);
    /// Move keyboard focus back to the display-name field.
    fn focus_name_field(&self);
}

/// The game server's room API.
pub trait RoomApi {
    fn create_room(&self, endpoint: &str) -> impl Future<Output = Result<CreatedRoom, EntryError>>;
}

/// Everything the controller needs from its environment.
pub trait EntryContext: SessionStore + Navigator + Notifier + RoomApi {}

impl<T> EntryContext for T where T: SessionStore + Navigator + Notifier + RoomApi {}
