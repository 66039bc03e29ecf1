//! Particle pool for impact and knockout effects.
//!
//! Particles are purely cosmetic: nothing in the simulation reads them back.
//! The combat resolver emits small bursts on hits and blocks, the round
//! controller emits the knockout explosion, and the pool advances and culls
//! them once per tick.
//!
//! # Example
//!
//! ```
//! use brawl_core::config::ParticleConfig;
//! use brawl_core::particles::{Color, ParticlePool};
//! use glam::Vec2;
//!
//! let mut pool = ParticlePool::new(ParticleConfig::default(), 7);
//! pool.spawn_burst(Vec2::new(400.0, 300.0), Color::RED, 10);
//! assert_eq!(pool.len(), 10);
//!
//! for _ in 0..60 {
//!     pool.update();
//! }
//! assert!(pool.is_empty());
//! ```

use std::f32::consts::TAU;
use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::ParticleConfig;

/// RNG stream reserved for particle effects.
const PARTICLE_STREAM: u64 = 2;

// =============================================================================
// Color
// =============================================================================

/// Packed `0xRRGGBB` colour.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(u32);

impl Color {
    /// Damage red
    pub const RED: Self = Self(0xFF_00_00);
    /// Block cyan
    pub const CYAN: Self = Self(0x00_FF_FF);
    /// Explosion fire
    pub const FIRE: Self = Self(0xEF_44_44);
    /// Explosion embers
    pub const EMBER: Self = Self(0xF5_9E_0B);
    /// Explosion flash
    pub const FLASH: Self = Self(0xFF_FF_FF);
    /// Explosion smoke
    pub const SMOKE: Self = Self(0x52_52_5B);

    /// Creates a colour from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    /// Red, green and blue channels.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        let [_, r, g, b] = self.0.to_be_bytes();
        [r, g, b]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

// =============================================================================
// Particle
// =============================================================================

/// One short-lived visual effect particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Centre position
    pub position: Vec2,
    /// Velocity in units per tick
    pub velocity: Vec2,
    /// Remaining lifetime in ticks; culled at zero
    pub life: f32,
    /// Fill colour
    pub color: Color,
    /// Radius
    pub size: f32,
}

// =============================================================================
// Particle Pool
// =============================================================================

/// Owns every live particle of a match.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    config: ParticleConfig,
    rng: ChaCha8Rng,
}

impl ParticlePool {
    /// Creates an empty pool whose bursts are seeded from `seed`.
    #[must_use]
    pub fn new(config: ParticleConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(PARTICLE_STREAM);
        Self {
            particles: Vec::new(),
            config,
            rng,
        }
    }

    /// Emits `count` particles from `origin` in random directions.
    pub fn spawn_burst(&mut self, origin: Vec2, color: Color, count: usize) {
        let config = &self.config;
        self.particles.reserve(count);
        for _ in 0..count {
            let speed = self.rng.gen::<f32>() * config.max_speed;
            let angle = self.rng.gen::<f32>() * TAU;
            let life = config.min_life + self.rng.gen::<f32>() * (config.max_life - config.min_life);
            let size = config.min_size + self.rng.gen::<f32>() * (config.max_size - config.min_size);
            self.particles.push(Particle {
                position: origin,
                velocity: Vec2::from_angle(angle) * speed,
                life,
                color,
                size,
            });
        }
    }

    /// Advances every particle one tick and culls the expired ones.
    pub fn update(&mut self) {
        let gravity = self.config.gravity;
        self.particles.retain_mut(|particle| {
            particle.position += particle.velocity;
            particle.life -= 1.0;
            particle.velocity.y += gravity;
            particle.life > 0.0
        });
    }

    /// Live particles in spawn order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns `true` if no particle is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Removes every particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
