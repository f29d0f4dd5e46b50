//! Plain domain records persisted by the controllers.
//!
//! # Responsibility
//! - Define the JSON shapes stored in each slot.
//! - Provide the fixed seed and static data.
//!
//! # Invariants
//! - Records carry no persistence behavior.
//! - Field names match the stored JSON (`camelCase` where it differs).

pub mod challenge;
pub mod chat;
pub mod mood;
pub mod profile;
pub mod resource;
