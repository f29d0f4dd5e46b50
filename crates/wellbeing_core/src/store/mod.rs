//! Typed JSON slots over a key-value medium.
//!
//! # Responsibility
//! - Serialize values into named slots and read them back with fallbacks.
//! - Name every slot the application persists.
//!
//! # Invariants
//! - Every slot holds a complete snapshot, never a delta.
//! - `load` never fails; `save` never surfaces errors to callers.

pub mod keys;
pub mod kv_store;
