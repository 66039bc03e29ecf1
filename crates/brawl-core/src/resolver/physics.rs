//! Physics resolver for intent motion and per-tick integration.
//!
//! The `PhysicsResolver` handles:
//! - Intent motion: facing, horizontal thrust and jumps
//! - Integration: timers, gravity, friction, ground and wall clamps
//!
//! # Fixed Timestep
//!
//! Every constant is expressed per tick, so integration is a plain
//! `position += velocity`. The tick rate itself lives in
//! [`TimingConfig`](crate::config::TimingConfig).

use crate::config::{ArenaConfig, MatchConfig, PhysicsConfig};
use crate::fighter::{Fighter, StatusFlags};
use crate::intent::Intent;

/// Resolver for fighter motion.
///
/// # Processing Order
///
/// 1. Count down attack cooldown and hitstun
/// 2. Clear the attack pose once the cooldown drops below the visible threshold
/// 3. Apply gravity, then friction
/// 4. Integrate position
/// 5. Snap to the ground line, clamp to the arena walls, cap horizontal speed
///
/// Dead fighters are frozen and skipped entirely.
///
/// # Example
///
/// ```
/// use brawl_core::config::MatchConfig;
/// use brawl_core::fighter::{Fighter, FighterKind, Side};
/// use brawl_core::resolver::PhysicsResolver;
///
/// let config = MatchConfig::default();
/// let resolver = PhysicsResolver::new(&config);
/// let mut panda = Fighter::spawn(FighterKind::Panda, Side::Player, &config);
///
/// resolver.integrate(&mut panda);
/// assert!(panda.is_grounded());
/// ```
#[derive(Debug, Clone)]
pub struct PhysicsResolver {
    physics: PhysicsConfig,
    arena: ArenaConfig,
    attack_visible_threshold: u32,
}

impl PhysicsResolver {
    /// Creates a physics resolver from the match configuration.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            physics: config.physics.clone(),
            arena: config.arena.clone(),
            attack_visible_threshold: config.fighter.attack_visible_threshold,
        }
    }

    /// Applies the movement part of an intent.
    ///
    /// Returns `true` if the fighter jumped. Jumps are only honoured on the
    /// ground.
    pub fn apply_motion(&self, fighter: &mut Fighter, intent: &Intent) -> bool {
        if let Some(facing) = intent.face {
            fighter.body.facing = facing;
        }
        fighter.body.velocity.x += intent.thrust;

        if intent.jump && fighter.is_grounded() {
            fighter.body.velocity.y = self.physics.jump_velocity;
            fighter.status.remove(StatusFlags::GROUNDED);
            return true;
        }
        false
    }

    /// Integrates one tick of motion for a fighter.
    pub fn integrate(&self, fighter: &mut Fighter) {
        if fighter.is_dead() {
            return;
        }
        let physics = &self.physics;

        fighter.timers.tick();
        if fighter.timers.attack_cooldown < self.attack_visible_threshold {
            fighter.status.remove(StatusFlags::ATTACKING);
        }

        let body = &mut fighter.body;
        body.velocity.y += physics.gravity;
        body.velocity.x *= physics.friction;
        body.position += body.velocity;

        if body.feet() >= self.arena.ground_y {
            body.position.y = self.arena.ground_y - body.size.y;
            body.velocity.y = 0.0;
            fighter.status.insert(StatusFlags::GROUNDED);
        } else {
            fighter.status.remove(StatusFlags::GROUNDED);
        }

        let body = &mut fighter.body;
        body.position.x = body.position.x.clamp(0.0, self.arena.width - body.size.x);
        body.velocity.x = body.velocity.x.clamp(-physics.max_speed, physics.max_speed);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::fighter::{Facing, FighterKind, Side};

    fn setup() -> (PhysicsResolver, Fighter) {
        let config = MatchConfig::default();
        (
            PhysicsResolver::new(&config),
            Fighter::spawn(FighterKind::Panda, Side::Player, &config),
        )
    }

    mod integration_tests {
        use super::*;

        #[test]
        fn resting_fighter_stays_on_the_ground() {
            let (resolver, mut fighter) = setup();
            for _ in 0..100 {
                resolver.integrate(&mut fighter);
            }
            assert_eq!(fighter.position(), Vec2::new(100.0, 420.0));
            assert_eq!(fighter.velocity(), Vec2::ZERO);
            assert!(fighter.is_grounded());
        }

        #[test]
        fn friction_applies_before_the_move() {
            let (resolver, mut fighter) = setup();
            fighter.body.velocity.x = 5.0;
            resolver.integrate(&mut fighter);
            assert!((fighter.velocity().x - 4.0).abs() < 1e-5);
            assert!((fighter.position().x - 104.0).abs() < 1e-4);
        }

        #[test]
        fn speed_is_capped_after_integration() {
            let (resolver, mut fighter) = setup();
            fighter.body.velocity.x = -20.0;
            resolver.integrate(&mut fighter);
            assert!((fighter.velocity().x + 5.0).abs() < f32::EPSILON);
            // The move itself used the uncapped, friction-reduced velocity.
            assert!((fighter.position().x - 84.0).abs() < 1e-4);
        }

        #[test]
        fn airborne_fighter_falls_and_loses_ground() {
            let (resolver, mut fighter) = setup();
            fighter.body.position.y = 200.0;
            resolver.integrate(&mut fighter);
            assert!(!fighter.is_grounded());
            assert!((fighter.velocity().y - 0.6).abs() < f32::EPSILON);
            assert!((fighter.position().y - 200.6).abs() < 1e-4);
        }

        #[test]
        fn landing_snaps_to_the_ground_line() {
            let (resolver, mut fighter) = setup();
            fighter.body.position.y = 410.0;
            fighter.body.velocity.y = 12.0;
            fighter.status.remove(StatusFlags::GROUNDED);
            resolver.integrate(&mut fighter);
            assert_eq!(fighter.position().y, 420.0);
            assert_eq!(fighter.velocity().y, 0.0);
            assert!(fighter.is_grounded());
        }

        #[test]
        fn walls_clamp_position() {
            let (resolver, mut fighter) = setup();
            fighter.body.position.x = 2.0;
            fighter.body.velocity.x = -5.0;
            resolver.integrate(&mut fighter);
            assert_eq!(fighter.position().x, 0.0);

            fighter.body.position.x = 748.0;
            fighter.body.velocity.x = 5.0;
            resolver.integrate(&mut fighter);
            assert_eq!(fighter.position().x, 750.0);
        }

        #[test]
        fn dead_fighters_are_frozen() {
            let (resolver, mut fighter) = setup();
            fighter.body.velocity = Vec2::new(3.0, -4.0);
            fighter.timers.attack_cooldown = 5;
            fighter.knock_out();
            let before = fighter.clone();
            resolver.integrate(&mut fighter);
            assert_eq!(fighter, before);
        }
    }

    mod timer_tests {
        use super::*;

        #[test]
        fn timers_count_down_once_per_tick() {
            let (resolver, mut fighter) = setup();
            fighter.timers.attack_cooldown = 20;
            fighter.timers.hit_stun = 1;
            resolver.integrate(&mut fighter);
            assert_eq!(fighter.timers.attack_cooldown, 19);
            assert_eq!(fighter.timers.hit_stun, 0);
        }

        #[test]
        fn attack_pose_clears_below_threshold() {
            let (resolver, mut fighter) = setup();
            fighter.timers.attack_cooldown = 11;
            fighter.status.insert(StatusFlags::ATTACKING);

            resolver.integrate(&mut fighter);
            assert!(fighter.is_attacking(), "cooldown 10 still shows the pose");

            resolver.integrate(&mut fighter);
            assert!(!fighter.is_attacking(), "cooldown 9 clears it");
        }
    }

    mod motion_tests {
        use super::*;

        #[test]
        fn thrust_and_facing_apply() {
            let (resolver, mut fighter) = setup();
            let jumped = resolver.apply_motion(&mut fighter, &Intent::idle().walk(Facing::Left, 1.0));
            assert!(!jumped);
            assert_eq!(fighter.facing(), Facing::Left);
            assert!((fighter.velocity().x + 1.0).abs() < f32::EPSILON);
        }

        #[test]
        fn jump_requires_ground() {
            let (resolver, mut fighter) = setup();
            let intent = Intent::idle().with_jump();

            assert!(resolver.apply_motion(&mut fighter, &intent));
            assert_eq!(fighter.velocity().y, -15.0);
            assert!(!fighter.is_grounded());

            fighter.body.velocity.y = -3.0;
            assert!(!resolver.apply_motion(&mut fighter, &intent));
            assert_eq!(fighter.velocity().y, -3.0);
        }

        #[test]
        fn jump_arc_returns_to_ground() {
            let (resolver, mut fighter) = setup();
            resolver.apply_motion(&mut fighter, &Intent::idle().with_jump());

            let mut airborne_ticks = 0;
            while !fighter.is_grounded() {
                resolver.integrate(&mut fighter);
                airborne_ticks += 1;
                assert!(airborne_ticks < 100, "fighter never landed");
            }
            assert_eq!(fighter.position().y, 420.0);
            assert!(airborne_ticks > 40);
        }
    }
}
