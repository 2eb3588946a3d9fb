//! Tuning parameters and defaults.

// --- Wave timing ---

/// Seconds spent in Idle before the next wave starts on its own.
pub const WAVE_TIMER_MAX_SECS: f32 = 5.0;

/// Seconds between two paced spawn/despawn actions.
pub const ACTION_INTERVAL_SECS: f32 = 0.005;

// --- Terrain ---

/// Noise sampling step per cell.
pub const NOISE_SCALE: f64 = 0.2;

/// Cells whose noise value is strictly above this become obstacles.
pub const NOISE_THRESHOLD: f32 = 0.5;

/// Lower bound of the per-wave horizontal noise offset.
pub const NOISE_OFFSET_MIN: i32 = 100;

/// Upper bound (exclusive) of the per-wave horizontal noise offset.
pub const NOISE_OFFSET_MAX: i32 = 10_000;

/// Fixed vertical noise offset.
pub const NOISE_OFFSET_Y: f64 = 30.0;

/// Chebyshev radius around the grid center kept free of obstacles.
pub const CENTER_CLEARANCE: u32 = 1;

// --- Placement ---

/// Props placed every wave, before turrets are added on top.
pub const STATIONARY_OBJECT_COUNT: u32 = 3;

/// Redraws allowed per placement before a colliding cell is accepted.
pub const PLACEMENT_RETRY_CAP: u32 = 100;

// --- Power budget ---

/// Power added to the running budget at the start of each roster.
pub const POWER_INCREMENT_PER_WAVE: u32 = 50;

/// Power cost of a turret.
pub const STATIONARY_THREAT_COST: u32 = 100;

/// Power cost of a roaming enemy.
pub const ROAMING_THREAT_COST: u32 = 10;

// --- Arena geometry ---

/// Default half extents of the visible world (32x18 tiles of 1 unit).
pub const WORLD_HALF_WIDTH: f32 = 16.0;
pub const WORLD_HALF_HEIGHT: f32 = 9.0;

/// Default tile edge length in world units.
pub const TILE_SIZE: f32 = 1.0;

// --- Headless session ---

/// Fixed update rate of the headless session (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per session tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Ticks an entity lingers in its despawn sequence before removal.
pub const DESPAWN_DELAY_TICKS: u32 = 3;
