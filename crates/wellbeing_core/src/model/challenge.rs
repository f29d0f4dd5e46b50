//! Resilience challenge records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeItem {
    /// Stable seeded identifier.
    pub id: u32,
    pub title: String,
    pub desc: String,
    pub done: bool,
}

impl ChallengeItem {
    fn starter(id: u32, title: &str, desc: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            desc: desc.to_string(),
            done: false,
        }
    }
}

/// The fixed starter set installed on first run.
pub fn starter_challenges() -> Vec<ChallengeItem> {
    vec![
        ChallengeItem::starter(1, "5‑minute breathing", "Follow your breath for 5 minutes."),
        ChallengeItem::starter(2, "Gratitude note", "Write 3 things you’re grateful for."),
        ChallengeItem::starter(3, "Reach out", "Send a supportive text to a friend."),
    ]
}
