//! Read-only fighter snapshots handed to decision sources.
//!
//! A [`FighterView`] copies the observable state of a fighter at the moment a
//! decision is made. Decision sources never hold a reference into the match,
//! so they cannot mutate fighters behind the simulation's back.

use glam::Vec2;

use crate::fighter::{Facing, Fighter, FighterKind, Side};

/// Immutable snapshot of one fighter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FighterView {
    /// Character
    pub kind: FighterKind,
    /// Slot in the match
    pub side: Side,
    /// Top-left corner
    pub position: Vec2,
    /// Velocity in units per tick
    pub velocity: Vec2,
    /// Facing direction
    pub facing: Facing,
    /// Current health
    pub hp: f32,
    /// Attack pose visible
    pub attacking: bool,
    /// Guard raised
    pub blocking: bool,
    /// Standing on the ground
    pub grounded: bool,
    /// Knocked out
    pub dead: bool,
    /// Ticks until the next attack is permitted
    pub attack_cooldown: u32,
    /// Remaining hitstun ticks
    pub hit_stun: u32,
}

impl FighterView {
    /// Horizontal offset from `self` to `other` (`other.x - self.x`).
    #[must_use]
    pub fn dx_to(&self, other: &Self) -> f32 {
        other.position.x - self.position.x
    }

    /// Absolute horizontal separation.
    #[must_use]
    pub fn gap(&self, other: &Self) -> f32 {
        self.dx_to(other).abs()
    }

    /// Returns `true` if `self` faces toward `other`.
    #[must_use]
    pub fn faces(&self, other: &Self) -> bool {
        self.facing.faces(self.dx_to(other))
    }

    /// Returns `true` if the attack is off cooldown.
    #[must_use]
    pub fn attack_ready(&self) -> bool {
        self.attack_cooldown == 0
    }
}

impl From<&Fighter> for FighterView {
    fn from(fighter: &Fighter) -> Self {
        Self {
            kind: fighter.kind,
            side: fighter.side,
            position: fighter.position(),
            velocity: fighter.velocity(),
            facing: fighter.facing(),
            hp: fighter.hp(),
            attacking: fighter.is_attacking(),
            blocking: fighter.is_blocking(),
            grounded: fighter.is_grounded(),
            dead: fighter.is_dead(),
            attack_cooldown: fighter.timers.attack_cooldown,
            hit_stun: fighter.timers.hit_stun,
        }
    }
}
