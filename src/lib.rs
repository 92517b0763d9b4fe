//! Sector Run - a vertical-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, obstacles, collisions, progression)
//! - `tuning`: Data-driven game balance and configuration validation
//!
//! Rendering, asset loading and the hosting page are external: they consume
//! the [`sim::Snapshot`] published after every tick.

pub mod sim;
pub mod tuning;

pub use sim::{Command, GamePhase, Session, Snapshot};
pub use tuning::{Sector, Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// World dimensions
    pub const WORLD_WIDTH: f32 = 390.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Craft bounding box and fixed horizontal position (center)
    pub const CRAFT_WIDTH: f32 = 56.0;
    pub const CRAFT_HEIGHT: f32 = 26.0;
    pub const CRAFT_X: f32 = 110.0;
    /// Hitbox shrink on every side (forgiving collisions)
    pub const HITBOX_PADDING: f32 = 12.0;

    /// Added to vertical velocity every Playing tick
    pub const GRAVITY: f32 = 0.22;
    /// Vertical velocity after a jump (overwrites, never adds)
    pub const JUMP_IMPULSE: f32 = -5.8;

    /// Column geometry - fixed across all sectors
    pub const COLUMN_WIDTH: f32 = 46.0;
    pub const COLUMN_INTERVAL: f32 = 300.0;
    pub const COLUMN_GAP: f32 = 210.0;
    pub const SCROLL_SPEED: f32 = 2.4;
    /// Minimum distance between a gap and the top/bottom world edge
    pub const GAP_MARGIN: f32 = 70.0;
    /// Horizontal offset of the first column past the right edge
    pub const FIRST_COLUMN_LEAD_IN: f32 = 80.0;
    /// Extra distance past the left edge before a column is retired
    pub const RETIRE_SLACK: f32 = 10.0;

    /// Shared countdown for all sectors of one life (seconds)
    pub const TIME_BUDGET_SECS: u32 = 60;
    /// Wall-clock wait before a victory can be dismissed (seconds)
    pub const VICTORY_COOLDOWN_SECS: f64 = 9.0;

    /// Particle feedback
    pub const PARTICLE_LIFETIME: u32 = 50;
    pub const PARTICLE_FRICTION: f32 = 0.93;
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    pub const PASS_BURST: usize = 10;
    pub const DEATH_BURST: usize = 24;

    /// Screen shake on death and its per-tick decay
    pub const DEATH_SHAKE: f32 = 9.0;
    pub const SHAKE_DECAY: f32 = 0.25;

    /// Background starfield
    pub const STAR_COUNT: usize = 60;
    /// Star drift while not Playing
    pub const STAR_IDLE_DRIFT: f32 = 0.5;

    /// Burst colors (0xRRGGBB)
    pub const COLOR_SUCCESS: u32 = 0x00FF88;
    pub const COLOR_ERROR: u32 = 0xFF2244;
}

/// Glow pulse in [0, 1] for a frame timestamp (ms) and angular rate
#[inline]
pub fn glow_pulse(timestamp_ms: f64, rate: f64) -> f32 {
    (((timestamp_ms * rate).sin() + 1.0) / 2.0) as f32
}
