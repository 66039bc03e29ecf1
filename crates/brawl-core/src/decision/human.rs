//! Human decision source.
//!
//! Translates the held controls straight into an intent every tick. Nothing
//! is smoothed or remembered between ticks: releasing block lowers the guard
//! on the very next decision.

use crate::config::PhysicsConfig;
use crate::fighter::Facing;
use crate::input::Control;
use crate::intent::{Guard, Intent};

use super::{DecisionContext, DecisionSource};

/// Decision source driven by the host's control snapshot.
#[derive(Debug, Clone)]
pub struct HumanSource {
    walk_accel: f32,
}

impl HumanSource {
    /// Creates a human source using the configured walk acceleration.
    #[must_use]
    pub fn new(physics: &PhysicsConfig) -> Self {
        Self {
            walk_accel: physics.walk_accel,
        }
    }
}

impl DecisionSource for HumanSource {
    fn name(&self) -> &'static str {
        "human"
    }

    fn decide(&mut self, ctx: &DecisionContext) -> Intent {
        let held = ctx.controls;
        let mut intent = Intent::idle();

        if held.is_held(Control::Left) {
            intent = intent.walk(Facing::Left, self.walk_accel);
        }
        if held.is_held(Control::Right) {
            intent = intent.walk(Facing::Right, self.walk_accel);
        }
        intent.jump = held.is_held(Control::Jump);
        intent.guard = if held.is_held(Control::Block) {
            Guard::Up
        } else {
            Guard::Down
        };
        intent.attack = held.is_held(Control::Attack);

        intent
    }
}
