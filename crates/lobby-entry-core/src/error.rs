//! Errors surfaced by the entry controller.

/// Everything that can stop an entry action.
///
/// None of these are fatal: each is logged, shown to the user once, and the
/// page stays usable for another attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("display name is empty")]
    EmptyName,

    #[error("room code is empty")]
    EmptyRoomCode,

    #[error("network error: {0}")]
    Transport(String),

    #[error("server rejected the request (HTTP {status})")]
    Server { status: u16 },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("a create request is already in flight")]
    CreateInFlight,
}

impl EntryError {
    /// Whether the error comes from an empty form field.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyName | Self::EmptyRoomCode)
    }

    /// Text shown to the user in the blocking notice.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyName => "Please enter your name.",
            Self::EmptyRoomCode => "Please enter a room code.",
            Self::Transport(_) | Self::Server { .. } | Self::Decode(_) => {
                "Could not create the game. Please try again."
            }
            Self::Storage(_) => "Your name could not be saved in this browser.",
            Self::CreateInFlight => "A game is already being created.",
        }
    }
}

impl From<serde_json::Error> for EntryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_kinds() {
        assert!(EntryError::EmptyName.is_validation());
        assert!(EntryError::EmptyRoomCode.is_validation());
        assert!(!EntryError::Server { status: 500 }.is_validation());
        assert!(!EntryError::Transport("offline".to_string()).is_validation());
    }

    #[test]
    fn test_network_failures_share_generic_message() {
        let transport = EntryError::Transport("offline".to_string());
        let server = EntryError::Server { status: 503 };
        let decode = EntryError::Decode("missing field `link`".to_string());

        assert_eq!(transport.user_message(), server.user_message());
        assert_eq!(server.user_message(), decode.user_message());
        assert!(!server.user_message().contains("503"));
    }

    #[test]
    fn test_display_includes_status() {
        let err = EntryError::Server { status: 404 };
        assert_eq!(err.to_string(), "server rejected the request (HTTP 404)");
    }
}
