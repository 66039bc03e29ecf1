//! Resolvers: the write phase of a tick.
//!
//! Decision sources only propose intents. Resolvers are where proposals
//! become state: the physics resolver moves fighters, the combat resolver
//! lands (or whiffs) attacks, and the event log records what happened for
//! the audio and telemetry collaborators.
//!
//! # Invariants
//!
//! - Resolvers are deterministic given the same inputs and call order
//! - Only the combat resolver changes health, and only downward
//! - Dead fighters are never moved or damaged
//!
//! # Available Resolvers
//!
//! - [`PhysicsResolver`]: Applies intent motion and integrates each tick
//! - [`CombatResolver`]: Resolves accepted attacks into hits, blocks or whiffs
//! - [`EventLog`]: Records events for audio cues and telemetry (no state mutation)

mod combat;
mod event;
mod physics;

pub use combat::{AttackOutcome, CombatResolver};
pub use event::{AudioCue, EventLog, EventRecord, MatchEvent};
pub use physics::PhysicsResolver;
