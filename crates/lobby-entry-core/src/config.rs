//! Entry page configuration.

use serde::{Deserialize, Serialize};

use crate::error::EntryError;

pub const DEFAULT_CREATE_ENDPOINT: &str = "/create_game";
pub const DEFAULT_LOBBY_PATH: &str = "/lobby";
pub const DEFAULT_USERNAME_KEY: &str = "username";

/// Endpoints and storage key used by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    /// Endpoint that creates a room and answers with its lobby link.
    pub create_endpoint: String,
    /// Prefix of lobby pages; the room code is appended as a path segment.
    pub lobby_path: String,
    /// Session storage key holding the display name.
    pub username_key: String,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self {
            create_endpoint: DEFAULT_CREATE_ENDPOINT.to_string(),
            lobby_path: DEFAULT_LOBBY_PATH.to_string(),
            username_key: DEFAULT_USERNAME_KEY.to_string(),
        }
    }
}

impl EntryConfig {
    /// Parse a JSON config document. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, EntryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace fields with the given overrides, ignoring blank ones.
    #[must_use]
    pub fn with_overrides(mut self, create_endpoint: Option<&str>, lobby_path: Option<&str>) -> Self {
        if let Some(endpoint) = create_endpoint.filter(|s| !s.trim().is_empty()) {
            self.create_endpoint = endpoint.trim().to_string();
        }
        if let Some(path) = lobby_path.filter(|s| !s.trim().is_empty()) {
            self.lobby_path = path.trim().to_string();
        }
        self
    }
}
