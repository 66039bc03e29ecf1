//! Test module for match scenarios, determinism and invariants.
//!
//! # Test Structure
//!
//! - `determinism.rs`: Same seed and inputs give identical matches
//! - `integration.rs`: End-to-end scenarios through `Match::step`
//! - `properties.rs`: Randomised invariant checks with proptest
//! - `helpers.rs`: Test sources, listeners and setup utilities

mod helpers;

// Re-export for convenience
pub use helpers::*;
