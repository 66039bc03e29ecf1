//! Match configuration.
//!
//! Every tunable of the simulation lives here, grouped by the component that
//! consumes it. All structs implement [`Default`] with the stock values of the
//! game, and deserialize with `#[serde(default)]` so a JSON document only has
//! to name the fields it overrides.
//!
//! # Example
//!
//! ```
//! use brawl_core::config::MatchConfig;
//!
//! let config = MatchConfig::from_json_str(r#"{ "seed": 7, "combat": { "damage": 20.0 } }"#)?;
//! assert_eq!(config.seed, 7);
//! assert!((config.combat.damage - 20.0).abs() < f32::EPSILON);
//! assert!((config.combat.reach - 80.0).abs() < f32::EPSILON);
//! # Ok::<(), brawl_core::error::ConfigError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::input::ControlBindings;

/// Arena geometry and spawn points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Horizontal extent; fighters are clamped to `[0, width - fighter width]`
    pub width: f32,
    /// Vertical extent (only used by renderers)
    pub height: f32,
    /// Y coordinate of the ground line (y grows downward)
    pub ground_y: f32,
    /// Spawn x of the human fighter
    pub player_spawn_x: f32,
    /// Spawn x of the autonomous fighter
    pub opponent_spawn_x: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            ground_y: 500.0,
            player_spawn_x: 100.0,
            opponent_spawn_x: 600.0,
        }
    }
}

/// Per-tick physics constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to `vy` every tick
    pub gravity: f32,
    /// Multiplier applied to `vx` every tick
    pub friction: f32,
    /// Cap on `|vx|` after integration
    pub max_speed: f32,
    /// `vy` assigned on a jump (negative is up)
    pub jump_velocity: f32,
    /// Horizontal acceleration of a held move control
    pub walk_accel: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            friction: 0.8,
            max_speed: 5.0,
            jump_velocity: -15.0,
            walk_accel: 1.0,
        }
    }
}

/// Body and health shared by both fighters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FighterConfig {
    /// Hitbox width
    pub width: f32,
    /// Hitbox height
    pub height: f32,
    /// Starting and maximum health
    pub max_hp: f32,
    /// Cooldown ticks after a human attack
    pub attack_recovery: u32,
    /// The attack pose clears once the cooldown drops below this many ticks
    pub attack_visible_threshold: u32,
}

impl Default for FighterConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 80.0,
            max_hp: 100.0,
            attack_recovery: 20,
            attack_visible_threshold: 10,
        }
    }
}

/// Hit and block resolution constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Exclusive horizontal reach of an attack
    pub reach: f32,
    /// Health removed by an unblocked hit
    pub damage: f32,
    /// Hitstun ticks inflicted by an unblocked hit
    pub hit_stun: u32,
    /// Horizontal knockback speed (hit and block)
    pub knockback: f32,
    /// Upward pop speed on an unblocked hit
    pub hit_pop: f32,
    /// Particles emitted on a blocked hit
    pub block_burst: usize,
    /// Particles emitted on an unblocked hit
    pub hit_burst: usize,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            reach: 80.0,
            damage: 10.0,
            hit_stun: 15,
            knockback: 8.0,
            hit_pop: 5.0,
            block_burst: 5,
            hit_burst: 10,
        }
    }
}

/// Behaviour profile of the autonomous fighter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiProfile {
    /// Ticks between strategic re-evaluations
    pub think_interval: u64,
    /// Horizontal band inside which an incoming attack triggers a block roll
    pub defense_band: f32,
    /// Probability of raising a reactive block
    pub block_chance: f64,
    /// Delay before a reactive block is lowered again
    pub guard_release_ms: u64,
    /// Separation above which the fighter closes distance instead of attacking
    pub engage_distance: f32,
    /// Horizontal acceleration toward the opponent when closing distance
    pub approach_accel: f32,
    /// Probability of a jump on a closing think
    pub jump_chance: f64,
    /// Height difference at which the opponent is chased with a jump
    pub height_advantage: f32,
    /// Probability of attacking at close range
    pub attack_chance: f64,
    /// Probability of blocking when a close-range attack roll fails
    pub block_fallback_chance: f64,
    /// Cooldown ticks after an autonomous attack
    pub attack_recovery: u32,
}

impl Default for AiProfile {
    fn default() -> Self {
        Self {
            think_interval: 15,
            defense_band: 120.0,
            block_chance: 0.6,
            guard_release_ms: 500,
            engage_distance: 70.0,
            approach_accel: 1.5,
            jump_chance: 0.05,
            height_advantage: 50.0,
            attack_chance: 0.8,
            block_fallback_chance: 0.5,
            attack_recovery: 25,
        }
    }
}

/// Cosmetic particle motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Added to a particle's `vy` every tick
    pub gravity: f32,
    /// Upper bound of the random launch speed
    pub max_speed: f32,
    /// Shortest lifetime in ticks
    pub min_life: f32,
    /// Longest lifetime in ticks
    pub max_life: f32,
    /// Smallest particle radius
    pub min_size: f32,
    /// Largest particle radius
    pub max_size: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            gravity: 0.1,
            max_speed: 15.0,
            min_life: 30.0,
            max_life: 50.0,
            min_size: 3.0,
            max_size: 11.0,
        }
    }
}

/// Tick rate and real-time delays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Simulation ticks per second
    pub tick_rate_hz: u32,
    /// Delay between the knockout and the end of the match
    pub game_over_delay_ms: u64,
    /// Upper bound on ticks run for a single rendered frame
    pub max_ticks_per_advance: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60,
            game_over_delay_ms: 3000,
            max_ticks_per_advance: 5,
        }
    }
}

impl TimingConfig {
    /// Converts a real-time delay to whole ticks, rounding up. Delays too long
    /// to represent in tick-milliseconds saturate instead of overflowing.
    ///
    /// ```
    /// use brawl_core::config::TimingConfig;
    ///
    /// let timing = TimingConfig::default();
    /// assert_eq!(timing.ticks_for_ms(500), 30);
    /// assert_eq!(timing.ticks_for_ms(3000), 180);
    /// ```
    #[must_use]
    pub fn ticks_for_ms(&self, ms: u64) -> u64 {
        ms.saturating_mul(u64::from(self.tick_rate_hz)).div_ceil(1000)
    }
}

/// Complete configuration for one match.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Arena geometry
    pub arena: ArenaConfig,
    /// Fighter integration constants
    pub physics: PhysicsConfig,
    /// Fighter body and health
    pub fighter: FighterConfig,
    /// Attack resolution
    pub combat: CombatConfig,
    /// Autonomous fighter profile
    pub ai: AiProfile,
    /// Particle motion
    pub particles: ParticleConfig,
    /// Tick rate and delays
    pub timing: TimingConfig,
    /// Host key names for each control
    pub controls: ControlBindings,
    /// Master seed for every random stream in the match
    pub seed: u64,
}

impl MatchConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] if a value fails validation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`MatchConfig::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Returns a copy with a different seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks that every value is usable by the simulation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let arena = &self.arena;
        let fighter = &self.fighter;

        if !(fighter.width > 0.0 && fighter.height > 0.0) {
            return Err(ConfigError::invalid("fighter.width", "and height must be positive"));
        }
        if fighter.max_hp <= 0.0 {
            return Err(ConfigError::invalid("fighter.max_hp", "must be positive"));
        }
        if fighter.attack_visible_threshold > fighter.attack_recovery {
            return Err(ConfigError::invalid(
                "fighter.attack_visible_threshold",
                "must not exceed fighter.attack_recovery",
            ));
        }
        if arena.width <= fighter.width {
            return Err(ConfigError::invalid("arena.width", "must exceed fighter.width"));
        }
        if arena.ground_y < fighter.height {
            return Err(ConfigError::invalid("arena.ground_y", "must leave room for a fighter"));
        }
        let max_x = arena.width - fighter.width;
        for (field, x) in [
            ("arena.player_spawn_x", arena.player_spawn_x),
            ("arena.opponent_spawn_x", arena.opponent_spawn_x),
        ] {
            if !(0.0..=max_x).contains(&x) {
                return Err(ConfigError::invalid(field, "must lie inside the arena"));
            }
        }

        if !(0.0..=1.0).contains(&self.physics.friction) {
            return Err(ConfigError::invalid("physics.friction", "must be in [0, 1]"));
        }
        if self.physics.max_speed <= 0.0 {
            return Err(ConfigError::invalid("physics.max_speed", "must be positive"));
        }

        if self.combat.reach <= 0.0 {
            return Err(ConfigError::invalid("combat.reach", "must be positive"));
        }
        if self.combat.damage < 0.0 {
            return Err(ConfigError::invalid("combat.damage", "must not be negative"));
        }

        let ai = &self.ai;
        if ai.think_interval == 0 {
            return Err(ConfigError::invalid("ai.think_interval", "must be at least 1"));
        }
        if ai.attack_recovery < fighter.attack_visible_threshold {
            return Err(ConfigError::invalid(
                "ai.attack_recovery",
                "must not be below fighter.attack_visible_threshold",
            ));
        }
        for (field, p) in [
            ("ai.block_chance", ai.block_chance),
            ("ai.jump_chance", ai.jump_chance),
            ("ai.attack_chance", ai.attack_chance),
            ("ai.block_fallback_chance", ai.block_fallback_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::invalid(field, "must be a probability in [0, 1]"));
            }
        }

        let particles = &self.particles;
        if particles.min_life <= 0.0 || particles.min_life > particles.max_life {
            return Err(ConfigError::invalid(
                "particles.min_life",
                "must be positive and not exceed particles.max_life",
            ));
        }
        if particles.min_size > particles.max_size {
            return Err(ConfigError::invalid(
                "particles.min_size",
                "must not exceed particles.max_size",
            ));
        }
        if particles.max_speed < 0.0 {
            return Err(ConfigError::invalid("particles.max_speed", "must not be negative"));
        }

        if self.timing.tick_rate_hz == 0 {
            return Err(ConfigError::invalid("timing.tick_rate_hz", "must be at least 1"));
        }
        if self.timing.max_ticks_per_advance == 0 {
            return Err(ConfigError::invalid(
                "timing.max_ticks_per_advance",
                "must be at least 1",
            ));
        }

        Ok(())
    }
}
