// Frame timing constants
pub const FRAME_INTERVAL_MS: u64 = 33;
/// Frames slower than this are clamped so a stalled terminal doesn't fast-forward timers.
pub const MAX_FRAME_DELTA_SECONDS: f64 = 0.25;

// Board size bounds accepted by settings and the options screen
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 30;
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Cells in the first-click exclusion zone (3x3).
pub const EXCLUSION_ZONE_CELLS: usize = 9;

// Animation durations (seconds)
pub const REVEAL_ANIMATION_SECONDS: f64 = 0.25;
pub const FLAG_ANIMATION_SECONDS: f64 = 0.35;

// Particle constants
pub const EXPLOSION_PARTICLE_COUNT: usize = 36;
pub const CONFETTI_PARTICLE_COUNT: usize = 72;
pub const PARTICLE_MIN_LIFETIME: f64 = 0.6;
pub const PARTICLE_MAX_LIFETIME: f64 = 1.6;
/// Speeds are in board cells per second.
pub const PARTICLE_MIN_SPEED: f64 = 2.0;
pub const PARTICLE_MAX_SPEED: f64 = 9.0;
pub const PARTICLE_MAX_SPIN: f64 = 8.0;
pub const PARTICLE_PALETTE_SIZE: u8 = 6;

// Backdrop constants
pub const BACKDROP_STAR_COUNT: usize = 90;
pub const BACKDROP_MIN_SPEED: f64 = 0.01;
pub const BACKDROP_MAX_SPEED: f64 = 0.06;
