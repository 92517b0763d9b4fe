//! Read-only view handed to the renderer and HUD after every tick

use serde::{Deserialize, Serialize};

use super::collision::Hitbox;
use super::progression::victory_cooldown_remaining;
use super::state::{GamePhase, GameState, Particle, Star};
use crate::tuning::Tuning;

/// Axis-aligned rectangle in world pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One column ready to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
    pub passed: bool,
    pub top: Rect,
    pub bottom: Rect,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    /// Frame timestamp this snapshot was taken at
    pub timestamp_ms: f64,
    pub world_width: f32,
    pub world_height: f32,

    // === Craft ===
    pub craft_x: f32,
    pub craft_y: f32,
    pub craft_vy: f32,
    pub craft_width: f32,
    pub craft_height: f32,
    pub hitbox: Rect,

    // === World ===
    pub obstacles: Vec<ObstacleView>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,

    // === HUD ===
    pub time_left: u32,
    pub level: usize,
    pub sector_count: usize,
    pub sector_label: String,
    pub sector_sublabel: String,
    pub columns_passed: u32,
    pub columns_required: u32,

    // === Effects ===
    pub death_shake: f32,
    pub glow_pulse: f32,
    /// Milliseconds until a victory can be dismissed; `None` outside Victory
    pub victory_cooldown_ms: Option<f64>,
}

impl Snapshot {
    pub fn capture(state: &GameState, tuning: &Tuning, timestamp_ms: f64, wall_now_ms: f64) -> Self {
        let sector = tuning.sector(state.level);
        let hitbox = Hitbox::craft(state.craft_y, tuning);

        let obstacles = state
            .obstacles
            .iter()
            .map(|o| {
                let gap_bottom = o.gap_bottom(tuning);
                ObstacleView {
                    x: o.x,
                    gap_top: o.gap_top,
                    gap_bottom,
                    passed: o.passed,
                    top: Rect {
                        x: o.x,
                        y: 0.0,
                        w: tuning.column_width,
                        h: o.gap_top,
                    },
                    bottom: Rect {
                        x: o.x,
                        y: gap_bottom,
                        w: tuning.column_width,
                        h: (tuning.world_height - gap_bottom).max(0.0),
                    },
                }
            })
            .collect();

        let victory_cooldown_ms = (state.phase == GamePhase::Victory)
            .then(|| victory_cooldown_remaining(state, tuning, wall_now_ms));

        Self {
            phase: state.phase,
            timestamp_ms,
            world_width: tuning.world_width,
            world_height: tuning.world_height,

            craft_x: tuning.craft_x,
            craft_y: state.craft_y,
            craft_vy: state.craft_vy,
            craft_width: tuning.craft_width,
            craft_height: tuning.craft_height,
            hitbox: Rect {
                x: hitbox.left,
                y: hitbox.top,
                w: hitbox.right - hitbox.left,
                h: hitbox.bottom - hitbox.top,
            },

            obstacles,
            particles: state.particles.clone(),
            stars: state.stars.clone(),

            time_left: state.time_left,
            level: state.level,
            sector_count: tuning.sectors.len(),
            sector_label: sector.label.clone(),
            sector_sublabel: sector.sublabel.clone(),
            columns_passed: state.columns_passed,
            columns_required: sector.required_columns,

            death_shake: state.death_shake,
            glow_pulse: state.glow_pulse,
            victory_cooldown_ms,
        }
    }

    /// Timer and sector HUD shows during play and on the clear screen
    pub fn hud_visible(&self) -> bool {
        matches!(self.phase, GamePhase::Playing | GamePhase::LevelClear)
    }

    /// The craft disappears once a death shake has settled
    pub fn craft_visible(&self) -> bool {
        self.phase != GamePhase::Dead || self.death_shake > 0.0
    }

    /// Whether a restart would be accepted right now
    pub fn can_restart(&self) -> bool {
        self.victory_cooldown_ms == Some(0.0)
    }
}
