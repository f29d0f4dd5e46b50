//! Chat room and message records.
//!
//! # Invariants
//! - `ChatMessage::room` is kept as stored text, so messages tagged with an
//!   unknown room survive load/save but match no `ChatRoom`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The four selectable chat rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRoom {
    #[default]
    General,
    Study,
    Social,
    Sleep,
}

impl ChatRoom {
    pub const ALL: [ChatRoom; 4] = [Self::General, Self::Study, Self::Social, Self::Sleep];

    /// Stored identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Study => "study",
            Self::Social => "social",
            Self::Sleep => "sleep",
        }
    }

    /// Human-readable room name.
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Study => "Study stress",
            Self::Social => "Friends & family",
            Self::Sleep => "Sleep & habits",
        }
    }
}

impl Display for ChatRoom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatRoom {
    type Err = UnknownRoomError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|room| room.as_str() == normalized)
            .ok_or_else(|| UnknownRoomError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoomError(pub String);

impl Display for UnknownRoomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown chat room `{}`; expected general|study|social|sleep",
            self.0
        )
    }
}

impl Error for UnknownRoomError {}

/// One locally stored chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub room: String,
    pub author: String,
    pub msg: String,
}

impl ChatMessage {
    pub fn new(room: ChatRoom, author: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            room: room.as_str().to_string(),
            author: author.into(),
            msg: msg.into(),
        }
    }

    pub fn is_in(&self, room: ChatRoom) -> bool {
        self.room == room.as_str()
    }
}

/// Messages used when no chat log is stored yet.
pub fn seed_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(
            ChatRoom::General,
            "Guide",
            "Welcome! Be kind. If you feel unsafe, reach out to a professional.",
        ),
        ChatMessage::new(ChatRoom::Study, "Luna", "Exams stressing me out—any tips?"),
    ]
}

#[cfg(test)]
mod tests {
    use super::{ChatMessage, ChatRoom};

    #[test]
    fn room_parses_case_insensitively() {
        assert_eq!(" Study ".parse::<ChatRoom>(), Ok(ChatRoom::Study));
        assert!("lobby".parse::<ChatRoom>().is_err());
    }

    #[test]
    fn unknown_room_message_roundtrips_but_matches_nothing() {
        let json = r#"{"room":"lobby","author":"Kai","msg":"hi"}"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert!(ChatRoom::ALL.iter().all(|room| !message.is_in(*room)));
        assert_eq!(serde_json::to_string(&message).unwrap(), json);
    }
}
