//! Decision sources: the intent producers that drive each fighter.
//!
//! Every fighter is bound to one [`DecisionSource`] when the match is built.
//! Each tick the match hands the source a [`DecisionContext`] holding
//! read-only snapshots of both fighters plus the human control state, and
//! applies the returned [`Intent`](crate::intent::Intent).
//!
//! # Available Sources
//!
//! - [`HumanSource`]: Maps held controls directly onto an intent, no memory
//! - [`AutonomousSource`]: Seeded, cadence-gated fighting policy
//!
//! # Example
//!
//! ```
//! use brawl_core::decision::{DecisionContext, DecisionSource, HumanSource};
//! use brawl_core::config::MatchConfig;
//! use brawl_core::fighter::{Fighter, FighterKind, Side};
//! use brawl_core::input::ControlState;
//! use brawl_core::view::FighterView;
//!
//! let config = MatchConfig::default();
//! let me = Fighter::spawn(FighterKind::Panda, Side::Player, &config);
//! let foe = Fighter::spawn(FighterKind::Bear, Side::Opponent, &config);
//!
//! let mut source = HumanSource::new(&config.physics);
//! let ctx = DecisionContext {
//!     tick: 1,
//!     me: FighterView::from(&me),
//!     opponent: FighterView::from(&foe),
//!     controls: ControlState::ATTACK,
//! };
//! assert!(source.decide(&ctx).attack);
//! ```

mod autonomous;
mod human;

pub use autonomous::AutonomousSource;
pub use human::HumanSource;

use crate::input::ControlState;
use crate::intent::Intent;
use crate::view::FighterView;

/// Everything a decision source may look at for one tick.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext {
    /// Current simulation tick (the first tick is 1)
    pub tick: u64,
    /// Snapshot of the fighter being decided for
    pub me: FighterView,
    /// Snapshot of its opponent
    pub opponent: FighterView,
    /// Controls held by the human player this tick
    pub controls: ControlState,
}

/// Produces a fighter's intent for one tick.
///
/// The match does not consult a source while its fighter is dead or in
/// hitstun; those ticks produce no intent at all.
///
/// Sources are `Send` so a match can be moved to the thread that drives it.
pub trait DecisionSource: Send {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the intent for `ctx.me` this tick.
    fn decide(&mut self, ctx: &DecisionContext) -> Intent;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_source_is_object_safe() {
        fn _accepts_boxed(_source: Box<dyn DecisionSource>) {}
        fn _accepts_slice(_sources: &[Box<dyn DecisionSource>]) {}
    }
}
