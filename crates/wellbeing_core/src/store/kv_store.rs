//! Key-value store facade.
//!
//! # Responsibility
//! - Provide `save(key, value)` and `load(key, fallback)` over any medium.
//! - Keep JSON encoding in one place.
//!
//! # Invariants
//! - `load` returns the fallback unchanged when the slot is absent, does not
//!   parse as the requested type, or the medium errors.
//! - `save` writes the full serialized value; failures are logged and dropped.
//! - Stored values are never logged; only keys and sizes are.

use crate::repo::kv_repo::{KvRepository, RepoError};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for explicit (`try_*`) store operations.
#[derive(Debug)]
pub enum StoreError {
    Repo(RepoError),
    Json {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Json { key, source } => write!(f, "invalid JSON in slot `{key}`: {source}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Typed JSON slots over a [`KvRepository`].
pub struct KeyValueStore<R: KvRepository> {
    repo: R,
}

impl<R: KvRepository> KeyValueStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying medium.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Serializes `value` into `key`, dropping any failure after logging it.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_save(key, value) {
            warn!(
                "event=kv_save module=store status=error key={} error={}",
                key, err
            );
        }
    }

    /// Reads `key` as `T`, or returns `fallback` exactly.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(err) => {
                warn!(
                    "event=kv_load module=store status=fallback key={} error={}",
                    key, err
                );
                fallback
            }
        }
    }

    /// Like [`load`](Self::load) but builds the fallback only when needed.
    pub fn load_or_else<T: DeserializeOwned>(&self, key: &str, fallback: impl FnOnce() -> T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback(),
            Err(err) => {
                warn!(
                    "event=kv_load module=store status=fallback key={} error={}",
                    key, err
                );
                fallback()
            }
        }
    }

    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Json {
            key: key.to_string(),
            source,
        })?;
        self.repo.put_value(key, &json)?;
        debug!(
            "event=kv_save module=store status=ok key={} bytes={}",
            key,
            json.len()
        );
        Ok(())
    }

    /// Returns `Ok(None)` for an absent slot and for a stored JSON `null`.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.repo.get_value(key)? else {
            return Ok(None);
        };
        let value: Option<T> = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            key: key.to_string(),
            source,
        })?;
        Ok(value)
    }

    /// Whether `key` currently holds any stored value.
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.repo.get_value(key), Ok(Some(_)))
    }

    /// Deletes one slot so the next `load` sees the fallback again.
    pub fn remove(&self, key: &str) -> StoreResult<bool> {
        Ok(self.repo.remove_value(key)?)
    }

    pub fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.repo.list_keys()?)
    }
}

#[cfg(test)]
mod tests {
    use super::KeyValueStore;
    use crate::repo::kv_repo::{KvRepository, MemoryKvRepository};

    #[test]
    fn stored_null_behaves_like_absent() {
        let store = KeyValueStore::new(MemoryKvRepository::new());
        store.repo().put_value("nickname", "null").unwrap();

        assert_eq!(store.load("nickname", "Guest".to_string()), "Guest");
    }

    #[test]
    fn unparsable_text_returns_fallback() {
        let store = KeyValueStore::new(MemoryKvRepository::new());
        store.repo().put_value("consent", "{not json").unwrap();

        assert!(!store.load("consent", false));
        assert!(store.try_load::<bool>("consent").is_err());
    }

    #[test]
    fn load_or_else_skips_fallback_when_present() {
        let store = KeyValueStore::new(MemoryKvRepository::new());
        store.save("chatRoom", "study");

        let mut built = false;
        let room: String = store.load_or_else("chatRoom", || {
            built = true;
            "general".to_string()
        });
        assert_eq!(room, "study");
        assert!(!built);
    }
}
