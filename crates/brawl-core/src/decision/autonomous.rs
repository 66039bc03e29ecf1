//! Autonomous decision source.
//!
//! The opponent runs on two cadences:
//!
//! - **Every tick**, reactive defense: when the opponent is mid-attack, inside
//!   the defense band and facing us, roll to raise a guard that releases
//!   itself after `guard_release_ms`.
//! - **Every `think_interval` ticks**, strategy: turn toward the opponent,
//!   drop the guard if there is nothing to block, then either close distance
//!   (with the occasional jump) or, at close range, attack or turtle.
//!
//! "Facing us" means the attacker's facing points toward this fighter's
//! position. Mirrored facings alone are not enough: two fighters that have
//! crossed over can face opposite ways while turned away from each other.
//!
//! Movement only changes on think ticks, which keeps the fighter readable
//! rather than frame-perfect. All randomness comes from a seeded ChaCha
//! stream, so a match is reproducible from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::{AiProfile, TimingConfig};
use crate::fighter::Facing;
use crate::intent::{Guard, Intent};

use super::{DecisionContext, DecisionSource};

/// RNG stream reserved for the autonomous fighter.
const AI_STREAM: u64 = 1;

/// Seeded, cadence-gated fighting policy.
#[derive(Debug, Clone)]
pub struct AutonomousSource {
    profile: AiProfile,
    guard_release_ticks: u64,
    rng: ChaCha8Rng,
    thinks: u64,
}

impl AutonomousSource {
    /// Creates a policy with the given profile, seeded from `seed`.
    ///
    /// The profile is not validated here. Chances outside `[0, 1]` are
    /// clamped when rolled and a NaN chance never succeeds;
    /// [`MatchConfig::validate`](crate::config::MatchConfig::validate)
    /// rejects both up front.
    #[must_use]
    pub fn new(profile: AiProfile, timing: &TimingConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(AI_STREAM);
        Self {
            guard_release_ticks: timing.ticks_for_ms(profile.guard_release_ms),
            profile,
            rng,
            thinks: 0,
        }
    }

    /// Number of strategic re-evaluations performed so far.
    #[must_use]
    pub fn thinks(&self) -> u64 {
        self.thinks
    }

    /// Returns `true` if `tick` is a strategic re-evaluation tick.
    #[must_use]
    pub fn is_think_tick(&self, tick: u64) -> bool {
        tick % self.profile.think_interval == 0
    }

    /// Draws a Bernoulli trial with success chance `p`.
    fn roll(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.rng.gen_bool(p)
    }

    /// Every-tick reactive defense.
    fn defend(&mut self, ctx: &DecisionContext, intent: &mut Intent) {
        let (me, foe) = (&ctx.me, &ctx.opponent);
        let threatened = foe.attacking && me.gap(foe) < self.profile.defense_band && foe.faces(me);

        if threatened && !me.blocking && self.roll(self.profile.block_chance) {
            debug!(tick = ctx.tick, "opponent raises reactive guard");
            intent.guard = Guard::UpFor(self.guard_release_ticks);
        }
    }

    /// Strategic re-evaluation on think ticks.
    fn think(&mut self, ctx: &DecisionContext, intent: &mut Intent) {
        let (me, foe) = (&ctx.me, &ctx.opponent);
        let dx = me.dx_to(foe);
        let gap = dx.abs();
        self.thinks += 1;

        intent.face = Some(Facing::toward(dx));

        if !foe.attacking {
            intent.guard = Guard::Down;
        }

        if gap > self.profile.engage_distance {
            intent.thrust += Facing::toward(dx).sign() * self.profile.approach_accel;

            let foe_above = foe.position.y < me.position.y - self.profile.height_advantage;
            if (foe_above || self.roll(self.profile.jump_chance)) && me.grounded {
                intent.jump = true;
            }
            debug!(tick = ctx.tick, gap, jump = intent.jump, "opponent closes distance");
        } else if me.attack_ready() {
            if self.roll(self.profile.attack_chance) {
                intent.attack = true;
                debug!(tick = ctx.tick, gap, "opponent attacks");
            } else {
                let raise = self.roll(self.profile.block_fallback_chance);
                intent.guard = if raise { Guard::Up } else { Guard::Down };
                debug!(tick = ctx.tick, gap, raise, "opponent holds position");
            }
        }
    }
}

impl DecisionSource for AutonomousSource {
    fn name(&self) -> &'static str {
        "autonomous"
    }

    fn decide(&mut self, ctx: &DecisionContext) -> Intent {
        let mut intent = Intent::idle();

        self.defend(ctx, &mut intent);
        if self.is_think_tick(ctx.tick) {
            self.think(ctx, &mut intent);
        }

        intent
    }
}
