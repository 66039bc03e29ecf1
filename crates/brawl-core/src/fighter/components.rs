//! State components that make up a [`Fighter`](super::Fighter).
//!
//! Components are plain data with public fields. The invariants that span
//! fields (health bounds, the dead-implies-idle rule) are kept by the methods
//! on `Fighter` and the resolvers; mutating fields directly is reserved for
//! test setup.

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// =============================================================================
// Facing
// =============================================================================

/// Horizontal direction a fighter faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Facing toward negative x
    Left,
    /// Facing toward positive x
    Right,
}

impl Facing {
    /// Facing that points along the sign of `dx`. Zero counts as left.
    #[must_use]
    pub fn toward(dx: f32) -> Self {
        if dx > 0.0 {
            Self::Right
        } else {
            Self::Left
        }
    }

    /// `1.0` for right, `-1.0` for left.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Returns `true` for [`Facing::Right`].
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::Right)
    }

    /// Returns `true` if a point at horizontal offset `dx` lies in front.
    ///
    /// A zero offset is never in front in either direction.
    #[must_use]
    pub fn faces(self, dx: f32) -> bool {
        match self {
            Self::Right => dx > 0.0,
            Self::Left => dx < 0.0,
        }
    }
}

// =============================================================================
// Body
// =============================================================================

/// Spatial state: axis-aligned box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner (y grows downward)
    pub position: Vec2,
    /// Velocity in units per tick
    pub velocity: Vec2,
    /// Width and height of the hitbox
    pub size: Vec2,
    /// Direction the fighter faces
    pub facing: Facing,
}

impl Body {
    /// Creates a resting body at `position`.
    #[must_use]
    pub fn new(position: Vec2, size: Vec2, facing: Facing) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size,
            facing,
        }
    }

    /// Centre of the hitbox.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Y coordinate of the bottom edge.
    #[must_use]
    pub fn feet(&self) -> f32 {
        self.position.y + self.size.y
    }
}

// =============================================================================
// Vitals
// =============================================================================

/// Health pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Current health in `[0, max_hp]`
    pub hp: f32,
    /// Maximum health
    pub max_hp: f32,
}

impl Vitals {
    /// Full health pool of size `max_hp`.
    #[must_use]
    pub const fn full(max_hp: f32) -> Self {
        Self { hp: max_hp, max_hp }
    }

    /// Removes `amount` health, clamped to `[0, max_hp]`.
    pub fn take_damage(&mut self, amount: f32) {
        self.hp = (self.hp - amount).clamp(0.0, self.max_hp);
    }

    /// Returns `true` once health is exhausted.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.hp <= 0.0
    }
}

// =============================================================================
// Timers
// =============================================================================

/// Frame-counted combat timers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timers {
    /// Ticks until the next attack is permitted
    pub attack_cooldown: u32,
    /// Ticks during which the fighter ignores its own intents
    pub hit_stun: u32,
}

impl Timers {
    /// Counts both timers down by one tick, stopping at zero.
    pub fn tick(&mut self) {
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
        self.hit_stun = self.hit_stun.saturating_sub(1);
    }
}

// =============================================================================
// Status Flags
// =============================================================================

bitflags! {
    /// Boolean combat state of a fighter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct StatusFlags: u8 {
        /// Attack pose and hitbox are visible
        const ATTACKING = 1 << 0;
        /// Guard is raised
        const BLOCKING = 1 << 1;
        /// Standing on the ground line
        const GROUNDED = 1 << 2;
        /// Knocked out; terminal
        const DEAD = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_toward_sign() {
        assert_eq!(Facing::toward(5.0), Facing::Right);
        assert_eq!(Facing::toward(-5.0), Facing::Left);
        assert_eq!(Facing::toward(0.0), Facing::Left);
    }

    #[test]
    fn facing_excludes_zero_offset() {
        assert!(Facing::Right.faces(0.1));
        assert!(!Facing::Right.faces(0.0));
        assert!(!Facing::Left.faces(0.0));
        assert!(Facing::Left.faces(-0.1));
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut vitals = Vitals::full(100.0);
        vitals.take_damage(30.0);
        assert!((vitals.hp - 70.0).abs() < f32::EPSILON);
        vitals.take_damage(500.0);
        assert_eq!(vitals.hp, 0.0);
        assert!(vitals.is_depleted());
    }

    #[test]
    fn negative_damage_never_exceeds_max() {
        let mut vitals = Vitals::full(100.0);
        vitals.take_damage(-50.0);
        assert_eq!(vitals.hp, 100.0);
    }

    #[test]
    fn timers_stop_at_zero() {
        let mut timers = Timers {
            attack_cooldown: 1,
            hit_stun: 0,
        };
        timers.tick();
        timers.tick();
        assert_eq!(timers, Timers::default());
    }

    #[test]
    fn body_geometry() {
        let body = Body::new(Vec2::new(100.0, 420.0), Vec2::new(50.0, 80.0), Facing::Right);
        assert_eq!(body.center(), Vec2::new(125.0, 460.0));
        assert_eq!(body.feet(), 500.0);
    }
}
