//! Local-first state core for the youth well-being prototype.
//! Every feature keeps its state in named JSON slots on this device.

pub mod config;
pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod shell;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use controller::challenge_controller::ChallengeController;
pub use controller::chat_controller::{ChatController, MessageBubble};
pub use controller::mood_controller::{MoodController, NO_AVERAGE};
pub use controller::onboarding_controller::{
    OnboardingController, OnboardingError, OnboardingState,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::challenge::ChallengeItem;
pub use model::chat::{ChatMessage, ChatRoom, UnknownRoomError};
pub use model::mood::{MoodEntry, MoodScore, MoodScoreError};
pub use model::profile::{Profile, Session};
pub use model::resource::{ResourceLink, RESOURCES};
pub use repo::kv_repo::{
    KvRepository, MemoryKvRepository, RepoError, RepoResult, SqliteKvRepository,
};
pub use shell::{Screen, Shell, Tab};
pub use store::kv_store::{KeyValueStore, StoreError, StoreResult};

/// Minimal health-check API for front-end wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
