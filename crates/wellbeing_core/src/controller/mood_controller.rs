//! Mood check-in controller.
//!
//! # Invariants
//! - History is stored oldest first and never re-sorted.
//! - Every check-in rewrites the full `moodEntries` slot.
//! - Entry ids strictly increase in storage order for entries this
//!   controller creates.

use crate::model::mood::{MoodEntry, MoodScore};
use crate::repo::kv_repo::KvRepository;
use crate::store::keys;
use crate::store::kv_store::KeyValueStore;
use chrono::{DateTime, Utc};
use log::info;

/// Sentinel label for an empty history.
pub const NO_AVERAGE: &str = "-";

pub struct MoodController<'s, R: KvRepository> {
    store: &'s KeyValueStore<R>,
    entries: Vec<MoodEntry>,
    selected: MoodScore,
    note_draft: String,
}

impl<'s, R: KvRepository> MoodController<'s, R> {
    pub fn new(store: &'s KeyValueStore<R>) -> Self {
        let entries = store.load(keys::MOOD_ENTRIES, Vec::new());
        Self {
            store,
            entries,
            selected: MoodScore::default(),
            note_draft: String::new(),
        }
    }

    /// Stored entries, oldest first.
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Entries in display order, newest first.
    pub fn history(&self) -> impl Iterator<Item = &MoodEntry> {
        self.entries.iter().rev()
    }

    pub fn selected(&self) -> MoodScore {
        self.selected
    }

    pub fn select(&mut self, mood: MoodScore) {
        self.selected = mood;
    }

    pub fn note_draft(&self) -> &str {
        &self.note_draft
    }

    pub fn set_note_draft(&mut self, note: impl Into<String>) {
        self.note_draft = note.into();
    }

    /// Records the selected mood with the drafted note.
    pub fn save_draft(&mut self) -> &MoodEntry {
        let note = std::mem::take(&mut self.note_draft);
        self.record_checkin(self.selected, note)
    }

    /// Appends a check-in stamped with the current time.
    pub fn record_checkin(&mut self, mood: MoodScore, note: impl Into<String>) -> &MoodEntry {
        self.record_checkin_at(mood, note, Utc::now())
    }

    /// Appends a check-in stamped with `now`, persists, and clears the draft.
    pub fn record_checkin_at(
        &mut self,
        mood: MoodScore,
        note: impl Into<String>,
        now: DateTime<Utc>,
    ) -> &MoodEntry {
        let id = self.next_id(now.timestamp_millis());
        self.entries.push(MoodEntry {
            id,
            date: now,
            mood: mood.value(),
            note: note.into(),
        });
        self.store.save(keys::MOOD_ENTRIES, &self.entries);
        self.note_draft.clear();
        info!(
            "event=mood_checkin module=mood status=ok entries={}",
            self.entries.len()
        );

        &self.entries[self.entries.len() - 1]
    }

    /// Mean mood rounded to one decimal, `None` when there is no history.
    pub fn compute_average(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let total: u64 = self.entries.iter().map(|entry| u64::from(entry.mood)).sum();
        let mean = total as f64 / self.entries.len() as f64;
        // Half-up at one decimal, so 2.25 reads as 2.3.
        Some((mean * 10.0).round() / 10.0)
    }

    /// Average formatted for display, or [`NO_AVERAGE`].
    pub fn average_label(&self) -> String {
        match self.compute_average() {
            Some(average) => format!("{average:.1}"),
            None => NO_AVERAGE.to_string(),
        }
    }

    fn next_id(&self, now_ms: i64) -> i64 {
        match self.entries.last() {
            Some(last) if last.id >= now_ms => last.id + 1,
            _ => now_ms,
        }
    }
}
