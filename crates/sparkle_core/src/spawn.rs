//! Explosion spawning
//!
//! A [`BurstSpawn`] describes one click's worth of particles: how many,
//! how fast and how long they live. Velocities and colors are sampled from
//! the caller's RNG so tests can seed it.

use rand::Rng;
use sparkle_math::{Color, Vec2};

use crate::particle::{Particle, DEFAULT_LIFETIME_FRAMES};

/// Particles spawned per click
pub const DEFAULT_BURST_COUNT: usize = 100;

/// Maximum absolute velocity component (pixels per frame)
pub const DEFAULT_MAX_SPEED: f32 = 2.0;

/// Burst configuration
#[derive(Clone, Debug, PartialEq)]
pub struct BurstSpawn {
    /// Number of particles per burst
    pub count: usize,
    /// Each velocity component is uniform in [0, max_speed) with a random sign
    pub max_speed: f32,
    /// Lifetime in frames
    pub lifetime: u32,
}

impl Default for BurstSpawn {
    fn default() -> Self {
        Self {
            count: DEFAULT_BURST_COUNT,
            max_speed: DEFAULT_MAX_SPEED,
            lifetime: DEFAULT_LIFETIME_FRAMES,
        }
    }
}

impl BurstSpawn {
    /// Sample one velocity; x and y are independent
    pub fn sample_velocity<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let vy = self.sample_component(rng);
        let vx = self.sample_component(rng);
        Vec2::new(vx, vy)
    }

    fn sample_component<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let magnitude = rng.gen::<f32>() * self.max_speed;
        if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Sample an opaque color with independent uniform components
    pub fn sample_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::rgb(rng.gen(), rng.gen(), rng.gen())
    }

    /// Create a full burst of particles at `origin`
    pub fn spawn<R: Rng + ?Sized>(&self, origin: Vec2, rng: &mut R) -> Vec<Particle> {
        (0..self.count)
            .map(|_| {
                let velocity = self.sample_velocity(rng);
                let color = self.sample_color(rng);
                Particle::new(origin, velocity, color, self.lifetime)
            })
            .collect()
    }
}
