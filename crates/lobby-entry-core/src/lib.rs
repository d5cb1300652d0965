//! Lobby Entry Core Library
//!
//! Domain values and the entry controller behind the lobby entry page.
//!
//! Everything browser-specific (session storage, navigation, alerts, HTTP)
//! sits behind the traits in [`context`], so the controller runs the same way
//! in the WASM client and in native unit tests.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod link;
pub mod name;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::EntryConfig;
pub use context::{EntryContext, Navigator, Notifier, RoomApi, SessionStore};
pub use controller::LobbyEntryController;
pub use error::EntryError;
pub use link::{CreatedRoom, LobbyLink, NavigationTarget};
pub use name::{DisplayName, RoomCode};
pub use view::EntryView;
