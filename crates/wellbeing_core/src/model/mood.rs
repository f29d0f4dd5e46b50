//! Mood check-in records.
//!
//! # Invariants
//! - `MoodScore` only holds values in `1..=5`.
//! - `MoodEntry::id` is unique within one history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Faces shown for scores 1 through 5.
const FACES: [&str; 5] = ["😟", "😕", "😐", "🙂", "😄"];

/// A mood rating on the five-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoodScore(u8);

impl MoodScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Midpoint used as the initial selection.
    pub const NEUTRAL: MoodScore = MoodScore(3);

    /// Creates a score, rejecting values outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, MoodScoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MoodScoreError(value))
        }
    }

    /// All five scores in ascending order.
    pub fn all() -> impl Iterator<Item = MoodScore> {
        (Self::MIN..=Self::MAX).map(MoodScore)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn face(self) -> &'static str {
        FACES[usize::from(self.0 - 1)]
    }
}

impl Default for MoodScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<u8> for MoodScore {
    type Error = MoodScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl Display for MoodScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected mood value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodScoreError(pub u8);

impl Display for MoodScoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "mood must be between {} and {}, got {}",
            MoodScore::MIN,
            MoodScore::MAX,
            self.0
        )
    }
}

impl Error for MoodScoreError {}

/// One stored check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Creation time in epoch milliseconds, bumped when needed to stay unique.
    pub id: i64,
    /// Wall-clock creation time.
    pub date: DateTime<Utc>,
    /// Raw stored rating. Controller-built entries are always `1..=5`.
    pub mood: u8,
    #[serde(default)]
    pub note: String,
}

impl MoodEntry {
    /// Face for the stored rating, `?` if the stored value is off-scale.
    pub fn face(&self) -> &'static str {
        MoodScore::new(self.mood).map_or("?", MoodScore::face)
    }
}

#[cfg(test)]
mod tests {
    use super::{MoodEntry, MoodScore, MoodScoreError};

    #[test]
    fn score_accepts_only_five_point_scale() {
        assert_eq!(MoodScore::new(0), Err(MoodScoreError(0)));
        assert_eq!(MoodScore::new(6), Err(MoodScoreError(6)));
        assert_eq!(MoodScore::all().count(), 5);
        assert_eq!(MoodScore::default().value(), 3);
    }

    #[test]
    fn entry_json_uses_iso_date() {
        let json = r#"{"id":1700000000000,"date":"2023-11-14T22:13:20.000Z","mood":4,"note":"ok"}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mood, 4);
        assert_eq!(entry.face(), "🙂");
        assert_eq!(entry.date.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn missing_note_defaults_to_empty() {
        let json = r#"{"id":1,"date":"2023-11-14T22:13:20Z","mood":2}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert!(entry.note.is_empty());
    }
}
