//! Persistence media behind the key-value store.
//!
//! # Responsibility
//! - Define the raw slot contract (`KvRepository`).
//! - Isolate SQLite details from controllers and the store facade.

pub mod kv_repo;
