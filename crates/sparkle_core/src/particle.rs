//! Particle and ParticleSet types
//!
//! A particle is a single fading dot of an explosion: it moves at constant
//! velocity and counts its lifetime down one frame at a time.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use sparkle_math::{Color, Rect, Vec2};

/// Default particle lifetime: three seconds at 60 frames per second
pub const DEFAULT_LIFETIME_FRAMES: u32 = 60 * 3;

/// A single explosion particle
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Top-left corner of the particle square (canvas-local)
    pub position: Vec2,
    /// Displacement per frame
    pub velocity: Vec2,
    /// Current color; alpha follows the remaining lifetime
    pub color: Color,
    lifetime: u32,
    remaining: u32,
}

impl Particle {
    /// Create a particle with a full lifetime
    pub fn new(position: Vec2, velocity: Vec2, color: Color, lifetime: u32) -> Self {
        Self {
            position,
            velocity,
            color,
            lifetime,
            remaining: lifetime,
        }
    }

    /// Advance one frame: count down, refresh alpha, move by velocity
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        self.color.a = self.alpha();
        self.position += self.velocity;
    }

    /// Remaining / initial lifetime
    pub fn alpha(&self) -> f32 {
        if self.lifetime == 0 {
            0.0
        } else {
            self.remaining as f32 / self.lifetime as f32
        }
    }

    /// Frames left before the particle expires
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Lifetime the particle was created with
    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Square covered by the particle when drawn at `size`
    pub fn bounds(&self, size: f32) -> Rect {
        Rect::new(self.position.x, self.position.y, size, size)
    }
}

/// The active particle collection
///
/// Particles are kept in spawn order. With a capacity limit the oldest
/// particles are dropped first when a new one would overflow it.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: VecDeque<Particle>,
    limit: Option<NonZeroUsize>,
}

impl ParticleSet {
    /// Create an unbounded set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding at most `limit` particles (`None` = unbounded)
    pub fn with_limit(limit: Option<NonZeroUsize>) -> Self {
        Self {
            particles: VecDeque::new(),
            limit,
        }
    }

    /// Capacity limit, if any
    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// Add a particle, evicting the oldest one if the set is full
    ///
    /// Returns the number of evicted particles (0 or 1).
    pub fn push(&mut self, particle: Particle) -> usize {
        let mut evicted = 0;
        if let Some(limit) = self.limit {
            while self.particles.len() >= limit.get() {
                self.particles.pop_front();
                evicted += 1;
            }
        }
        self.particles.push_back(particle);
        evicted
    }

    /// Add every particle from `iter`, returning the total evicted
    pub fn extend<I: IntoIterator<Item = Particle>>(&mut self, iter: I) -> usize {
        iter.into_iter().map(|p| self.push(p)).sum()
    }

    /// Drop every particle whose lifetime has run out
    ///
    /// Returns the number of particles removed.
    pub fn remove_expired(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired());
        before - self.particles.len()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_particle(lifetime: u32) -> Particle {
        Particle::new(
            Vec2::new(50.0, 50.0),
            Vec2::new(1.5, -0.5),
            Color::rgb(0.2, 0.4, 0.6),
            lifetime,
        )
    }

    #[test]
    fn test_new_particle_is_full() {
        let p = make_particle(180);
        assert_eq!(p.remaining(), 180);
        assert_eq!(p.lifetime(), 180);
        assert_eq!(p.alpha(), 1.0);
        assert!(!p.is_expired());
    }

    #[test]
    fn test_tick_counts_down_and_moves() {
        let mut p = make_particle(180);
        p.tick();
        assert_eq!(p.remaining(), 179);
        assert_eq!(p.position, Vec2::new(51.5, 49.5));
        assert_eq!(p.velocity, Vec2::new(1.5, -0.5));
        assert!((p.color.a - 179.0 / 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_lifetime_decreases_by_one_until_zero() {
        let mut p = make_particle(180);
        for expected in (0..180).rev() {
            p.tick();
            assert_eq!(p.remaining(), expected);
        }
        assert!(p.is_expired());
    }

    #[test]
    fn test_alpha_non_increasing_and_zero_at_expiry() {
        let mut p = make_particle(180);
        let mut last = p.alpha();
        while !p.is_expired() {
            p.tick();
            assert!(p.color.a <= last);
            last = p.color.a;
        }
        assert_eq!(p.color.a, 0.0);
    }

    #[test]
    fn test_tick_after_expiry_stays_at_zero() {
        let mut p = make_particle(1);
        p.tick();
        p.tick();
        assert_eq!(p.remaining(), 0);
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn test_bounds() {
        let p = make_particle(10);
        assert_eq!(p.bounds(3.0), Rect::new(50.0, 50.0, 3.0, 3.0));
    }

    #[test]
    fn test_remove_expired() {
        let mut set = ParticleSet::new();
        set.push(make_particle(1));
        set.push(make_particle(2));
        set.iter_mut().for_each(Particle::tick);
        assert_eq!(set.remove_expired(), 1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_unbounded_set_grows() {
        let mut set = ParticleSet::new();
        let evicted = set.extend((0..1000).map(|_| make_particle(5)));
        assert_eq!(evicted, 0);
        assert_eq!(set.len(), 1000);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut set = ParticleSet::with_limit(NonZeroUsize::new(3));
        for lifetime in 1..=5 {
            set.push(make_particle(lifetime));
        }
        assert_eq!(set.len(), 3);
        let lifetimes: Vec<u32> = set.iter().map(|p| p.lifetime()).collect();
        assert_eq!(lifetimes, vec![3, 4, 5]);
    }

    #[test]
    fn test_limit_of_one_keeps_newest() {
        let mut set = ParticleSet::with_limit(NonZeroUsize::new(1));
        assert_eq!(set.push(make_particle(5)), 0);
        assert_eq!(set.push(make_particle(6)), 1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().map(|p| p.lifetime()), Some(6));
    }
}
