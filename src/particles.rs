//! Cosmetic particle bursts for detonations and victories.
//!
//! Positions are in board cell space: `x` grows with columns, `y` with rows,
//! and the centre of cell `(row, col)` sits at `(col - 0.5, row - 0.5)`.

use std::f64::consts::TAU;

use rand::Rng;

use crate::constants::{
    PARTICLE_MAX_LIFETIME, PARTICLE_MAX_SPEED, PARTICLE_MAX_SPIN, PARTICLE_MIN_LIFETIME,
    PARTICLE_MIN_SPEED, PARTICLE_PALETTE_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Debris thrown out by a detonated mine.
    Explosion,
    /// Celebration burst when the board is cleared.
    Confetti,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub rotation: f64,
    pub angular_velocity: f64,
    /// Remaining lifetime in seconds.
    pub lifetime: f64,
    pub max_lifetime: f64,
    /// Index into the renderer's palette for this kind.
    pub palette_index: u8,
}

impl Particle {
    /// Integrate one step; returns false once the particle has burnt out.
    pub fn update(&mut self, delta: f64) -> bool {
        self.x += self.vx * delta;
        self.y += self.vy * delta;
        self.rotation += self.angular_velocity * delta;
        self.lifetime -= delta;
        self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }

    /// Fraction of lifetime left, 1.0 when freshly spawned.
    pub fn remaining_fraction(&self) -> f64 {
        if self.max_lifetime <= 0.0 {
            return 0.0;
        }
        (self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `count` particles from `center` with random outward velocity,
    /// spin, lifetime and colour.
    pub fn spawn_burst<R: Rng>(
        &mut self,
        rng: &mut R,
        kind: ParticleKind,
        center: (f64, f64),
        count: usize,
    ) {
        self.particles.reserve(count);
        for _ in 0..count {
            let angle = rng.gen_range(0.0..TAU);
            let speed = rng.gen_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
            let lifetime = rng.gen_range(PARTICLE_MIN_LIFETIME..PARTICLE_MAX_LIFETIME);
            self.particles.push(Particle {
                kind,
                x: center.0,
                y: center.1,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                rotation: 0.0,
                angular_velocity: rng.gen_range(-PARTICLE_MAX_SPIN..PARTICLE_MAX_SPIN),
                lifetime,
                max_lifetime: lifetime,
                palette_index: rng.gen_range(0..PARTICLE_PALETTE_SIZE),
            });
        }
    }

    /// Advance every particle by `dt` and drop the dead ones.
    pub fn tick(&mut self, dt: f64) {
        self.particles.retain_mut(|particle| particle.update(dt));
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Centre of a 1-indexed cell in particle space.
pub fn cell_center(row: usize, col: usize) -> (f64, f64) {
    (col as f64 - 0.5, row as f64 - 0.5)
}
