//! Combat resolver for attack connection, damage and knockback.
//!
//! The `CombatResolver` runs the instant an attack intent is accepted. It
//! decides whether the swing connects and, if so, whether the defender's
//! guard absorbs it.
//!
//! # Connection
//!
//! An attack connects iff the horizontal offset `dx = defender.x - attacker.x`
//! satisfies `|dx| < reach` and the attacker faces the defender's side. The
//! reach bound is exclusive.

use glam::Vec2;
use tracing::trace;

use crate::config::CombatConfig;
use crate::fighter::Fighter;
use crate::particles::{Color, ParticlePool};

/// What an accepted attack did to the defender.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackOutcome {
    /// Connected on an open defender
    Hit {
        /// Health actually removed
        damage: f32,
    },
    /// Connected on a raised guard
    Blocked,
    /// Out of reach or facing away
    Whiffed,
    /// Defender already knocked out
    Ignored,
}

/// Resolver for attack contact.
///
/// # Example
///
/// ```
/// use brawl_core::config::MatchConfig;
/// use brawl_core::fighter::{Fighter, FighterKind, Side};
/// use brawl_core::particles::ParticlePool;
/// use brawl_core::resolver::{AttackOutcome, CombatResolver};
///
/// let config = MatchConfig::default();
/// let resolver = CombatResolver::new(config.combat.clone());
/// let mut pool = ParticlePool::new(config.particles.clone(), 0);
///
/// let panda = Fighter::spawn(FighterKind::Panda, Side::Player, &config);
/// let mut bear = Fighter::spawn(FighterKind::Bear, Side::Opponent, &config);
///
/// // 500 units apart: nowhere near reach.
/// let outcome = resolver.resolve_attack(&panda, &mut bear, &mut pool);
/// assert_eq!(outcome, AttackOutcome::Whiffed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CombatResolver {
    combat: CombatConfig,
}

impl CombatResolver {
    /// Creates a combat resolver.
    #[must_use]
    pub fn new(combat: CombatConfig) -> Self {
        Self { combat }
    }

    /// Returns `true` if `attacker` would connect with `defender`.
    #[must_use]
    pub fn connects(&self, attacker: &Fighter, defender: &Fighter) -> bool {
        let dx = defender.position().x - attacker.position().x;
        dx.abs() < self.combat.reach && attacker.facing().faces(dx)
    }

    /// Resolves one accepted attack against `defender`.
    ///
    /// Impact bursts are emitted from the defender's centre.
    pub fn resolve_attack(
        &self,
        attacker: &Fighter,
        defender: &mut Fighter,
        particles: &mut ParticlePool,
    ) -> AttackOutcome {
        if defender.is_dead() {
            return AttackOutcome::Ignored;
        }
        if !self.connects(attacker, defender) {
            trace!(attacker = %attacker.side, "attack whiffed");
            return AttackOutcome::Whiffed;
        }

        let combat = &self.combat;
        // Facing the defender means the facing sign is also "away from the attacker".
        let push = attacker.facing().sign() * combat.knockback;
        let impact = defender.body.center();

        if defender.is_blocking() {
            defender.body.velocity.x = push;
            particles.spawn_burst(impact, Color::CYAN, combat.block_burst);
            trace!(defender = %defender.side, "attack blocked");
            return AttackOutcome::Blocked;
        }

        let before = defender.hp();
        defender.vitals.take_damage(combat.damage);
        defender.timers.hit_stun = combat.hit_stun;
        defender.body.velocity = Vec2::new(push, -combat.hit_pop);
        particles.spawn_burst(impact, Color::RED, combat.hit_burst);

        let damage = before - defender.hp();
        trace!(defender = %defender.side, damage, hp = defender.hp(), "attack hit");
        AttackOutcome::Hit { damage }
    }
}
