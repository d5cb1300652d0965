//! Lobby links and navigation targets.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EntryError;
use crate::name::{DisplayName, RoomCode};

/// Query parameter carrying the display name into the lobby page.
pub const USERNAME_QUERY_KEY: &str = "username";

/// A server-provided path to a lobby. Only checked for non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LobbyLink(String);

impl LobbyLink {
    pub fn parse(raw: &str) -> Result<Self, EntryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EntryError::Decode("empty lobby link".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Link to `<lobby_path>/<code>` for a room the user typed in.
    pub fn for_room(lobby_path: &str, code: &RoomCode) -> Self {
        Self(format!("{}/{}", lobby_path.trim_end_matches('/'), code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LobbyLink {
    type Error = EntryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LobbyLink> for String {
    fn from(link: LobbyLink) -> Self {
        link.0
    }
}

/// Body of a successful create-game response.
///
/// ```json
/// { "room_code": "AB12CD", "link": "/lobby/AB12CD" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRoom {
    pub link: LobbyLink,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_code: Option<String>,
}

impl CreatedRoom {
    pub fn from_json(body: &str) -> Result<Self, EntryError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Where the browser goes next: a lobby path plus the player's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    link: LobbyLink,
    username: DisplayName,
}

impl NavigationTarget {
    pub fn new(link: LobbyLink, username: DisplayName) -> Self {
        Self { link, username }
    }

    pub fn path(&self) -> &str {
        self.link.as_str()
    }

    pub fn username(&self) -> &DisplayName {
        &self.username
    }
}

/// Renders `<path>?username=<name>` without percent-encoding; adapters that
/// hand the URL to a browser encode the query themselves.
impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}?{}={}",
            self.link.as_str(),
            USERNAME_QUERY_KEY,
            self.username
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_room_parses_link_and_code() {
        let room = CreatedRoom::from_json(r#"{"room_code":"AB12CD","link":"/lobby/AB12CD"}"#)
            .unwrap();
        assert_eq!(room.link.as_str(), "/lobby/AB12CD");
        assert_eq!(room.room_code.as_deref(), Some("AB12CD"));
    }

    #[test]
    fn test_created_room_code_is_optional() {
        let room = CreatedRoom::from_json(r#"{"link":"/lobby/AB12"}"#).unwrap();
        assert_eq!(room.link.as_str(), "/lobby/AB12");
        assert!(room.room_code.is_none());
    }

    #[test]
    fn test_created_room_rejects_missing_or_empty_link() {
        assert!(matches!(
            CreatedRoom::from_json(r#"{"room_code":"AB12"}"#),
            Err(EntryError::Decode(_))
        ));
        assert!(matches!(
            CreatedRoom::from_json(r#"{"link":"  "}"#),
            Err(EntryError::Decode(_))
        ));
        assert!(matches!(
            CreatedRoom::from_json("<html>oops</html>"),
            Err(EntryError::Decode(_))
        ));
    }

    #[test]
    fn test_link_for_room() {
        let code = RoomCode::parse("ab12").unwrap();
        assert_eq!(LobbyLink::for_room("/lobby", &code).as_str(), "/lobby/AB12");
        assert_eq!(LobbyLink::for_room("/lobby/", &code).as_str(), "/lobby/AB12");
    }

    #[test]
    fn test_navigation_target_display() {
        let target = NavigationTarget::new(
            LobbyLink::parse("/lobby/AB12").unwrap(),
            DisplayName::parse("Sam").unwrap(),
        );
        assert_eq!(target.to_string(), "/lobby/AB12?username=Sam");
        assert_eq!(target.path(), "/lobby/AB12");
        assert_eq!(target.username().as_str(), "Sam");
    }
}
