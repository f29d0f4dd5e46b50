//! Feature controllers.
//!
//! # Responsibility
//! - Own one feature's in-memory working copy.
//! - Write the complete collection back to the store after every mutation.
//!
//! # Invariants
//! - Controllers never hold partial snapshots; what is in memory is what was
//!   last written (unless that write failed).
//! - Controllers stay medium-agnostic via `KvRepository`.

pub mod challenge_controller;
pub mod chat_controller;
pub mod mood_controller;
pub mod onboarding_controller;
