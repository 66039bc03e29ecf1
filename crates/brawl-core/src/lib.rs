//! # Brawl Core
//!
//! Real-time combat core for a two-fighter arena brawler.
//!
//! This crate provides the fixed-tick combat simulation: the physics
//! integrator, the hit/block resolution model, the autonomous opponent's
//! decision loop and the round-ending state machine. Rendering, audio
//! synthesis and menus are collaborators that talk to a [`Match`] through
//! read-only queries, the held-control snapshot and [`MatchListener`] hooks.
//!
//! ## Architecture
//!
//! - **Fighters**: Two embodied combatants, created at match start and never removed
//! - **Decision sources**: Human and autonomous producers of per-tick intents
//! - **Resolvers**: Physics, combat and event recording
//! - **Round controller**: `Active → RoundEnded → GameOver`
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use brawl_core::{FighterKind, Match, Side};
//!
//! let mut brawl = Match::new(FighterKind::Panda);
//! brawl.press_key("ArrowRight");
//!
//! // One rendered frame at 60 Hz.
//! brawl.advance(Duration::from_millis(17));
//!
//! assert!(brawl.fighter(Side::Player).velocity().x > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clock;
pub mod config;
pub mod decision;
pub mod error;
pub mod fighter;
pub mod input;
pub mod intent;
pub mod particles;
pub mod resolver;
pub mod round;
pub mod schedule;
pub mod simulation;
pub mod view;

pub use config::MatchConfig;
pub use error::{ConfigError, Result};
pub use fighter::{Fighter, FighterKind, Side};
pub use resolver::{AudioCue, MatchEvent};
pub use round::{MatchListener, MatchResult, Phase};
pub use simulation::Match;

#[cfg(test)]
mod tests;
