//! Animated starfield drawn behind the menus and the board.
//!
//! Star positions live in a normalized `[0, 1)` field and are scaled to the
//! viewport by the renderer.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{BACKDROP_MAX_SPEED, BACKDROP_MIN_SPEED, BACKDROP_STAR_COUNT};

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Twinkle phase in radians.
    pub phase: f64,
    pub twinkle_rate: f64,
}

impl Star {
    /// Brightness in `[0, 1]` derived from the twinkle phase.
    pub fn brightness(&self) -> f64 {
        0.5 + 0.5 * self.phase.sin()
    }
}

#[derive(Debug, Clone)]
pub struct Backdrop {
    stars: Vec<Star>,
}

impl Backdrop {
    pub fn new() -> Self {
        Self::with_rng(&mut StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let stars = (0..BACKDROP_STAR_COUNT)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                let speed = rng.gen_range(BACKDROP_MIN_SPEED..BACKDROP_MAX_SPEED);
                Star {
                    x: rng.gen_range(0.0..1.0),
                    y: rng.gen_range(0.0..1.0),
                    vx: angle.cos() * speed,
                    vy: angle.sin() * speed,
                    phase: rng.gen_range(0.0..TAU),
                    twinkle_rate: rng.gen_range(0.5..3.0),
                }
            })
            .collect();

        Self { stars }
    }

    /// Drift every star by `dt` seconds, wrapping at the field edges.
    pub fn tick(&mut self, dt: f64) {
        for star in &mut self.stars {
            star.x = wrap_unit(star.x + star.vx * dt);
            star.y = wrap_unit(star.y + star.vy * dt);
            star.phase = (star.phase + star.twinkle_rate * dt) % TAU;
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new()
    }
}

fn wrap_unit(value: f64) -> f64 {
    let wrapped = value.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}
