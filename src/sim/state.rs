//! Game state and core simulation types
//!
//! One `GameState` describes one life. Resets never patch a live state: they
//! build a new one and the session swaps it in.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacles::initial_obstacles;
use super::physics::make_stars;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    Idle,
    /// Active gameplay
    Playing,
    /// Sector requirement met, waiting for continue
    LevelClear,
    /// Last sector cleared
    Victory,
    /// Craft hit a column or left the world
    Dead,
    /// Shared countdown ran out
    TimesUp,
}

impl GamePhase {
    /// Phases that end the current life's play
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GamePhase::Victory | GamePhase::Dead | GamePhase::TimesUp
        )
    }
}

/// A column pair: top block `[0, gap_top]`, bottom block `[gap_top + gap, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Leading (left) edge
    pub x: f32,
    pub gap_top: f32,
    /// Set once when the trailing edge crosses the craft
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    #[inline]
    pub fn trailing_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.column_width
    }

    #[inline]
    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_top + tuning.column_gap
    }

    /// Whether the column spans any of the open interval `(left, right)`
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32, tuning: &Tuning) -> bool {
        right > self.x && left < self.trailing_edge(tuning)
    }
}

/// A particle for visual feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Ticks remaining
    pub life: u32,
    pub max_life: u32,
    /// 0xRRGGBB
    pub color: u32,
}

impl Particle {
    /// Remaining life as a fraction, for fading
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

/// A background star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    /// Leftward drift per Playing tick
    pub speed: f32,
    pub opacity: f32,
}

/// Complete state of one life
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Craft vertical position (center)
    pub craft_y: f32,
    /// Craft vertical velocity (positive is down)
    pub craft_vy: f32,
    /// Columns sorted by ascending x
    pub obstacles: Vec<Obstacle>,
    /// Columns passed in the current sector
    pub columns_passed: u32,
    /// Index into the sector table
    pub level: usize,
    pub phase: GamePhase,
    /// Screen shake magnitude, decays toward zero
    pub death_shake: f32,
    /// Seconds left in the shared budget
    pub time_left: u32,
    /// Frame timestamp (ms) the whole-second countdown is measured from
    pub last_tick_anchor: Option<f64>,
    pub particles: Vec<Particle>,
    /// Wall-clock ms of the first Victory tick
    pub victory_timestamp: Option<f64>,
    pub stars: Vec<Star>,
    /// Cosmetic glow in [0, 1]
    pub glow_pulse: f32,
}

impl GameState {
    /// Full reset: whole budget, first sector, nothing passed
    pub fn fresh<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R, phase: GamePhase) -> Self {
        Self::build(tuning, rng, phase, 0, tuning.time_budget_secs)
    }

    /// Partial reset for the next sector: keeps the countdown, rebuilds the world
    pub fn next_sector<R: Rng + ?Sized>(&self, tuning: &Tuning, rng: &mut R) -> Self {
        Self::build(
            tuning,
            rng,
            GamePhase::Playing,
            self.level + 1,
            self.time_left,
        )
    }

    fn build<R: Rng + ?Sized>(
        tuning: &Tuning,
        rng: &mut R,
        phase: GamePhase,
        level: usize,
        time_left: u32,
    ) -> Self {
        Self {
            craft_y: tuning.world_height / 2.0,
            craft_vy: 0.0,
            obstacles: initial_obstacles(tuning, rng),
            columns_passed: 0,
            level,
            phase,
            death_shake: 0.0,
            time_left,
            last_tick_anchor: None,
            particles: Vec::new(),
            victory_timestamp: None,
            stars: make_stars(tuning, rng),
            glow_pulse: 0.0,
        }
    }

    /// Columns the current sector asks for
    pub fn required_columns(&self, tuning: &Tuning) -> u32 {
        tuning.sector(self.level).required_columns
    }
}
