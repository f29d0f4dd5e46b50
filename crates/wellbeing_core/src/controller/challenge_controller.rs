//! Resilience challenge controller.
//!
//! # Invariants
//! - The list is seeded once and never grows or shrinks afterwards.
//! - `toggle` is self-inverse and rewrites the full list.

use crate::model::challenge::{starter_challenges, ChallengeItem};
use crate::repo::kv_repo::KvRepository;
use crate::store::keys;
use crate::store::kv_store::KeyValueStore;
use log::info;

pub struct ChallengeController<'s, R: KvRepository> {
    store: &'s KeyValueStore<R>,
    items: Vec<ChallengeItem>,
}

impl<'s, R: KvRepository> ChallengeController<'s, R> {
    /// Loads the list, installing the starter set on first run.
    pub fn new(store: &'s KeyValueStore<R>) -> Self {
        let items = store.load_or_else(keys::CHALLENGES, starter_challenges);
        let mut controller = Self { store, items };
        controller.seed_if_absent();
        controller
    }

    /// Persists the in-memory list when nothing is stored yet.
    ///
    /// Returns whether a seed was written.
    pub fn seed_if_absent(&mut self) -> bool {
        if self.store.contains(keys::CHALLENGES) {
            return false;
        }
        self.store.save(keys::CHALLENGES, &self.items);
        info!(
            "event=challenges_seed module=challenges status=ok items={}",
            self.items.len()
        );
        true
    }

    pub fn items(&self) -> &[ChallengeItem] {
        &self.items
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Flips `done` for `id` and persists.
    ///
    /// Returns the new state, or `None` (nothing written) for an unknown id.
    pub fn toggle(&mut self, id: u32) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.done = !item.done;
        let done = item.done;

        self.store.save(keys::CHALLENGES, &self.items);
        info!("event=challenge_toggle module=challenges status=ok id={id} done={done}");
        Some(done)
    }
}
