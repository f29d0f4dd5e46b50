//! Navigation shell.
//!
//! # Responsibility
//! - Decide between the onboarding gate and the main tabs.
//! - Carry the explicit `Session` that controllers are built from.
//!
//! # Invariants
//! - Tabs are only reachable once the session is complete.
//! - Completion is read once at boot from the `consent` slot.

use crate::model::chat::ChatRoom;
use crate::model::profile::{Profile, Session};
use crate::repo::kv_repo::KvRepository;
use crate::store::keys;
use crate::store::kv_store::KeyValueStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Mood,
    Chat,
    Challenges,
    Resources,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Self::Mood, Self::Chat, Self::Challenges, Self::Resources];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mood => "mood",
            Self::Chat => "chat",
            Self::Challenges => "challenges",
            Self::Resources => "resources",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mood => "Mood",
            Self::Chat => "Chat",
            Self::Challenges => "Challenges",
            Self::Resources => "Resources",
        }
    }
}

impl FromStr for Tab {
    type Err = UnknownTabError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == normalized)
            .ok_or_else(|| UnknownTabError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTabError(pub String);

impl Display for UnknownTabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown tab `{}`; expected mood|chat|challenges|resources",
            self.0
        )
    }
}

impl Error for UnknownTabError {}

/// What the shell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Main(Tab),
}

pub struct Shell {
    session: Session,
    tab: Tab,
}

impl Shell {
    /// Builds the shell from persisted profile slots.
    pub fn boot<R: KvRepository>(store: &KeyValueStore<R>) -> Self {
        Self::from_profile(&load_profile(store))
    }

    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            session: Session {
                nickname: profile.nickname.clone(),
                onboarding_complete: profile.onboarding_complete(),
            },
            tab: Tab::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        if self.session.onboarding_complete {
            Screen::Main(self.tab)
        } else {
            Screen::Onboarding
        }
    }

    /// Accepts the session produced by a successful onboarding start.
    pub fn complete_onboarding(&mut self, session: Session) {
        self.session = session;
        self.tab = Tab::default();
    }

    /// Switches tabs. Returns `false` while onboarding is still pending.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if !self.session.onboarding_complete {
            return false;
        }
        self.tab = tab;
        true
    }

    pub fn greeting(&self) -> String {
        format!("Hi, {} 👋", self.session.display_name())
    }
}

/// Reads the profile slots with their documented defaults.
pub fn load_profile<R: KvRepository>(store: &KeyValueStore<R>) -> Profile {
    Profile {
        nickname: store.load(keys::NICKNAME, String::new()),
        consent_given: store.load(keys::CONSENT, false),
        current_room: store.load(keys::CHAT_ROOM, ChatRoom::General),
    }
}
