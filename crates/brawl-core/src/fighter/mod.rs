//! Fighter entities.
//!
//! This module provides the combatant types of a match:
//! - [`Side`]: Which of the two slots a fighter occupies
//! - [`FighterKind`]: The character, doubling as display and winner label
//! - [`Fighter`]: The complete physical and combat state of one combatant
//!
//! # Example
//!
//! ```
//! use brawl_core::config::MatchConfig;
//! use brawl_core::fighter::{Fighter, FighterKind, Side};
//!
//! let config = MatchConfig::default();
//! let panda = Fighter::spawn(FighterKind::Panda, Side::Player, &config);
//!
//! assert_eq!(panda.hp(), 100.0);
//! assert!(panda.is_grounded());
//! assert!(panda.facing().is_right());
//! ```

pub mod components;

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;

pub use components::{Body, Facing, StatusFlags, Timers, Vitals};

// =============================================================================
// Side
// =============================================================================

/// One of the two fighter slots.
///
/// Sides are ordered `Player < Opponent`, which is also the fixed evaluation
/// order of the round controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled fighter, spawned on the left
    Player,
    /// Autonomous fighter, spawned on the right
    Opponent,
}

impl Side {
    /// Both sides in evaluation order.
    pub const BOTH: [Self; 2] = [Self::Player, Self::Opponent];

    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }

    /// Storage index of this side.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Opponent => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Opponent => write!(f, "opponent"),
        }
    }
}

// =============================================================================
// Fighter Kind
// =============================================================================

/// Playable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FighterKind {
    /// Kung-fu panda
    Panda,
    /// Cyber bear
    Bear,
}

impl FighterKind {
    /// The character the opponent plays against `self`.
    #[must_use]
    pub const fn rival(self) -> Self {
        match self {
            Self::Panda => Self::Bear,
            Self::Bear => Self::Panda,
        }
    }
}

impl fmt::Display for FighterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panda => write!(f, "PANDA"),
            Self::Bear => write!(f, "BEAR"),
        }
    }
}

// =============================================================================
// Fighter
// =============================================================================

/// The full physical and combat state of one combatant.
///
/// # Invariants
///
/// - `0 <= hp <= max_hp`
/// - `DEAD` implies `hp == 0` and not `ATTACKING`
/// - `DEAD` is terminal; a fighter is never removed from the match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    /// Character
    pub kind: FighterKind,
    /// Slot in the match
    pub side: Side,
    /// Position, velocity, size and facing
    pub body: Body,
    /// Health pool
    pub vitals: Vitals,
    /// Attack cooldown and hitstun
    pub timers: Timers,
    /// Attacking/blocking/grounded/dead flags
    pub status: StatusFlags,
    /// Cooldown ticks applied after each accepted attack
    pub attack_recovery: u32,
}

impl Fighter {
    /// Spawns a fighter at its side's spawn point, standing on the ground at
    /// full health and facing the arena centre.
    #[must_use]
    pub fn spawn(kind: FighterKind, side: Side, config: &MatchConfig) -> Self {
        let (x, attack_recovery) = match side {
            Side::Player => (config.arena.player_spawn_x, config.fighter.attack_recovery),
            Side::Opponent => (config.arena.opponent_spawn_x, config.ai.attack_recovery),
        };
        let size = Vec2::new(config.fighter.width, config.fighter.height);
        let position = Vec2::new(x, config.arena.ground_y - size.y);
        let facing = if x < config.arena.width / 2.0 {
            Facing::Right
        } else {
            Facing::Left
        };

        Self {
            kind,
            side,
            body: Body::new(position, size, facing),
            vitals: Vitals::full(config.fighter.max_hp),
            timers: Timers::default(),
            status: StatusFlags::GROUNDED,
            attack_recovery,
        }
    }

    /// Current health.
    #[must_use]
    pub fn hp(&self) -> f32 {
        self.vitals.hp
    }

    /// Top-left position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    /// Velocity in units per tick.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    /// Facing direction.
    #[must_use]
    pub fn facing(&self) -> Facing {
        self.body.facing
    }

    /// Returns `true` while the attack pose is visible.
    #[must_use]
    pub fn is_attacking(&self) -> bool {
        self.status.contains(StatusFlags::ATTACKING)
    }

    /// Returns `true` while the guard is raised.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.status.contains(StatusFlags::BLOCKING)
    }

    /// Returns `true` while standing on the ground.
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.status.contains(StatusFlags::GROUNDED)
    }

    /// Returns `true` once knocked out.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.status.contains(StatusFlags::DEAD)
    }

    /// Returns `true` while the fighter cannot act on its own intents.
    #[must_use]
    pub fn is_stunned(&self) -> bool {
        self.timers.hit_stun > 0
    }

    /// Returns `true` if the fighter may act this tick.
    #[must_use]
    pub fn can_act(&self) -> bool {
        !self.is_dead() && !self.is_stunned()
    }

    /// Raises or lowers the guard.
    pub fn set_blocking(&mut self, blocking: bool) {
        self.status.set(StatusFlags::BLOCKING, blocking);
    }

    /// Marks the fighter knocked out: health zero, attack cleared.
    pub fn knock_out(&mut self) {
        self.vitals.hp = 0.0;
        self.status.insert(StatusFlags::DEAD);
        self.status.remove(StatusFlags::ATTACKING);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_are_ordered_player_first() {
        assert!(Side::Player < Side::Opponent);
        assert_eq!(Side::BOTH, [Side::Player, Side::Opponent]);
        assert_eq!(Side::Player.other(), Side::Opponent);
        assert_eq!(Side::Opponent.index(), 1);
    }

    #[test]
    fn rival_is_the_other_kind() {
        assert_eq!(FighterKind::Panda.rival(), FighterKind::Bear);
        assert_eq!(FighterKind::Bear.rival(), FighterKind::Panda);
    }

    #[test]
    fn kind_displays_as_winner_label() {
        assert_eq!(format!("{} WINS!", FighterKind::Bear), "BEAR WINS!");
    }

    #[test]
    fn spawn_places_fighters_on_the_ground_facing_each_other() {
        let config = MatchConfig::default();
        let player = Fighter::spawn(FighterKind::Panda, Side::Player, &config);
        let opponent = Fighter::spawn(FighterKind::Bear, Side::Opponent, &config);

        assert_eq!(player.position(), Vec2::new(100.0, 420.0));
        assert_eq!(opponent.position(), Vec2::new(600.0, 420.0));
        assert_eq!(player.facing(), Facing::Right);
        assert_eq!(opponent.facing(), Facing::Left);
        assert_eq!(player.attack_recovery, 20);
        assert_eq!(opponent.attack_recovery, 25);
        assert!(player.is_grounded() && opponent.is_grounded());
        assert!(player.can_act());
    }

    #[test]
    fn knock_out_clears_attack_and_health() {
        let config = MatchConfig::default();
        let mut fighter = Fighter::spawn(FighterKind::Panda, Side::Player, &config);
        fighter.status.insert(StatusFlags::ATTACKING);
        fighter.vitals.hp = 5.0;

        fighter.knock_out();

        assert!(fighter.is_dead());
        assert!(!fighter.is_attacking());
        assert_eq!(fighter.hp(), 0.0);
        assert!(!fighter.can_act());
    }

    #[test]
    fn stunned_fighter_cannot_act() {
        let config = MatchConfig::default();
        let mut fighter = Fighter::spawn(FighterKind::Bear, Side::Opponent, &config);
        fighter.timers.hit_stun = 1;
        assert!(fighter.is_stunned());
        assert!(!fighter.can_act());
    }

    #[test]
    fn fighter_serializes() {
        let config = MatchConfig::default();
        let fighter = Fighter::spawn(FighterKind::Panda, Side::Player, &config);
        let json = serde_json::to_string(&fighter).unwrap();
        let restored: Fighter = serde_json::from_str(&json).unwrap();
        assert_eq!(fighter, restored);
    }
}
