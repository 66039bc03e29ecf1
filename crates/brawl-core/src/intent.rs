//! Per-tick command bundle produced by decision sources.
//!
//! An [`Intent`] is a proposal: the match applies it to the fighter only if
//! the fighter can act, and an attack is only accepted when the fighter is
//! off cooldown and not blocking once the intent's [`Guard`] has been applied.
//!
//! # Example
//!
//! ```
//! use brawl_core::intent::{Guard, Intent};
//! use brawl_core::fighter::Facing;
//!
//! let intent = Intent::idle().walk(Facing::Left, 1.0).with_guard(Guard::Down);
//! assert!(intent.moves());
//! assert!(!intent.attack);
//! ```

use serde::{Deserialize, Serialize};

use crate::fighter::Facing;

/// What the intent does to the fighter's guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guard {
    /// Leave the guard as it is
    #[default]
    Keep,
    /// Raise the guard
    Up,
    /// Lower the guard
    Down,
    /// Raise the guard and lower it again after this many ticks, replacing
    /// any release already pending for the fighter
    UpFor(u64),
}

/// Command bundle for one fighter for one tick.
///
/// Fields are independent except that an accepted attack requires the guard
/// to be down after `guard` is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// New facing, if any
    pub face: Option<Facing>,
    /// Signed horizontal acceleration added to `vx`
    pub thrust: f32,
    /// Jump if grounded
    pub jump: bool,
    /// Attempt an attack
    pub attack: bool,
    /// Guard change
    pub guard: Guard,
}

impl Intent {
    /// An intent that changes nothing.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            face: None,
            thrust: 0.0,
            jump: false,
            attack: false,
            guard: Guard::Keep,
        }
    }

    /// Adds a walk step: face `facing` and accelerate `accel` along it.
    ///
    /// Steps accumulate, so walking left then right nets zero thrust and
    /// leaves the fighter facing right.
    #[must_use]
    pub fn walk(mut self, facing: Facing, accel: f32) -> Self {
        self.face = Some(facing);
        self.thrust += facing.sign() * accel;
        self
    }

    /// Sets the guard change.
    #[must_use]
    pub const fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    /// Requests a jump.
    #[must_use]
    pub const fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }

    /// Requests an attack.
    #[must_use]
    pub const fn with_attack(mut self) -> Self {
        self.attack = true;
        self
    }

    /// Returns `true` if the intent carries a movement decision.
    #[must_use]
    pub fn moves(&self) -> bool {
        self.face.is_some() || self.thrust != 0.0 || self.jump
    }

    /// Returns `true` if applying the intent would change nothing.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.moves() && !self.attack && self.guard == Guard::Keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_changes_nothing() {
        assert!(Intent::idle().is_idle());
        assert_eq!(Intent::idle(), Intent::default());
    }

    #[test]
    fn opposite_walks_cancel_thrust_and_face_last() {
        let intent = Intent::idle()
            .walk(Facing::Left, 1.0)
            .walk(Facing::Right, 1.0);
        assert_eq!(intent.thrust, 0.0);
        assert_eq!(intent.face, Some(Facing::Right));
        assert!(intent.moves());
    }

    #[test]
    fn builders_set_flags() {
        let intent = Intent::idle().with_jump().with_attack().with_guard(Guard::UpFor(30));
        assert!(intent.jump);
        assert!(intent.attack);
        assert_eq!(intent.guard, Guard::UpFor(30));
        assert!(!intent.is_idle());
    }
}
