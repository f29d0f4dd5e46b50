//! Local profile and session state.
//!
//! # Invariants
//! - Onboarding completion is derived from `consent_given`, never stored
//!   separately.

use super::chat::ChatRoom;

/// Minimum trimmed nickname length, counted in characters.
pub const MIN_NICKNAME_CHARS: usize = 2;

/// Name shown when no nickname has been stored.
pub const GUEST_NICKNAME: &str = "Guest";

/// Snapshot of the persisted profile slots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub nickname: String,
    pub consent_given: bool,
    pub current_room: ChatRoom,
}

impl Profile {
    pub fn onboarding_complete(&self) -> bool {
        self.consent_given
    }
}

/// Explicit session value handed from onboarding to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub nickname: String,
    pub onboarding_complete: bool,
}

impl Session {
    /// Nickname for display and chat authorship; `Guest` when blank.
    pub fn display_name(&self) -> &str {
        if self.nickname.is_empty() {
            GUEST_NICKNAME
        } else {
            &self.nickname
        }
    }
}

/// Whether `nickname` meets the onboarding length gate.
pub fn nickname_is_valid(nickname: &str) -> bool {
    nickname.trim().chars().count() >= MIN_NICKNAME_CHARS
}
