//! Persisted slot names.

/// Onboarding nickname (`text`, default `""`).
pub const NICKNAME: &str = "nickname";
/// Onboarding consent flag (`boolean`, default `false`).
pub const CONSENT: &str = "consent";
/// Mood check-in history (`MoodEntry[]`, default `[]`).
pub const MOOD_ENTRIES: &str = "moodEntries";
/// Selected chat room (`text`, default `"general"`).
pub const CHAT_ROOM: &str = "chatRoom";
/// Local chat log (`ChatMessage[]`, default two seed messages).
pub const MESSAGES: &str = "messages";
/// Resilience challenges (`ChallengeItem[]`, default three starters).
pub const CHALLENGES: &str = "challenges";

/// All slots in display order.
pub const ALL: [&str; 6] = [
    NICKNAME,
    CONSENT,
    MOOD_ENTRIES,
    CHAT_ROOM,
    MESSAGES,
    CHALLENGES,
];
