//! Game balance and world configuration
//!
//! Everything the simulation reads as a constant lives here so a host can
//! load overrides from JSON. Invalid layouts are rejected up front: there is
//! no runtime recovery once a session is ticking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// One difficulty stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    /// Columns that must be passed to clear the sector
    pub required_columns: u32,
    /// HUD title
    pub label: String,
    /// HUD hint shown under the title
    #[serde(default)]
    pub sublabel: String,
}

impl Sector {
    pub fn new(required_columns: u32, label: &str, sublabel: &str) -> Self {
        Self {
            required_columns,
            label: label.to_string(),
            sublabel: sublabel.to_string(),
        }
    }
}

/// Rejected configuration
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("gap {gap} does not fit in world height {height}")]
    GapTooLarge { gap: f32, height: f32 },
    #[error("gap {gap} with margin {margin} leaves no room in world height {height}")]
    NoRoomForGap { gap: f32, margin: f32, height: f32 },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("sector table is empty")]
    NoSectors,
    #[error("sector {index} requires no columns")]
    EmptySector { index: usize },
    #[error("sector {index} requires {required} columns, fewer than the sector before it")]
    DecreasingSectors { index: usize, required: u32 },
    #[error("hitbox padding {padding} collapses the {width}x{height} craft")]
    HitboxCollapsed { padding: f32, width: f32, height: f32 },
    #[error("column interval {interval} leaves no column ahead of the craft (must be below {limit})")]
    ColumnsTooSparse { interval: f32, limit: f32 },
    #[error("victory cooldown must be zero or more seconds, got {0}")]
    InvalidCooldown(f64),
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,

    // === Craft ===
    pub craft_x: f32,
    pub craft_width: f32,
    pub craft_height: f32,
    pub hitbox_padding: f32,
    pub gravity: f32,
    pub jump_impulse: f32,

    // === Columns ===
    pub column_width: f32,
    pub column_interval: f32,
    pub column_gap: f32,
    pub scroll_speed: f32,
    pub gap_margin: f32,
    pub first_column_lead_in: f32,
    pub retire_slack: f32,

    // === Progression ===
    pub time_budget_secs: u32,
    pub victory_cooldown_secs: f64,
    pub sectors: Vec<Sector>,

    // === Feedback ===
    pub particle_lifetime: u32,
    pub particle_friction: f32,
    pub particle_gravity: f32,
    pub pass_burst: usize,
    pub death_burst: usize,
    pub death_shake: f32,
    pub shake_decay: f32,
    pub star_count: usize,
    pub star_idle_drift: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            craft_x: CRAFT_X,
            craft_width: CRAFT_WIDTH,
            craft_height: CRAFT_HEIGHT,
            hitbox_padding: HITBOX_PADDING,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            column_width: COLUMN_WIDTH,
            column_interval: COLUMN_INTERVAL,
            column_gap: COLUMN_GAP,
            scroll_speed: SCROLL_SPEED,
            gap_margin: GAP_MARGIN,
            first_column_lead_in: FIRST_COLUMN_LEAD_IN,
            retire_slack: RETIRE_SLACK,

            time_budget_secs: TIME_BUDGET_SECS,
            victory_cooldown_secs: VICTORY_COOLDOWN_SECS,
            sectors: vec![
                Sector::new(1, "SECTOR 1", "pass 1 column"),
                Sector::new(3, "SECTOR 2", "pass 3 columns"),
                Sector::new(5, "SECTOR 3", "pass 5 columns"),
            ],

            particle_lifetime: PARTICLE_LIFETIME,
            particle_friction: PARTICLE_FRICTION,
            particle_gravity: PARTICLE_GRAVITY,
            pass_burst: PASS_BURST,
            death_burst: DEATH_BURST,
            death_shake: DEATH_SHAKE,
            shake_decay: SHAKE_DECAY,
            star_count: STAR_COUNT,
            star_idle_drift: STAR_IDLE_DRIFT,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning: {} sectors, gap {}, budget {}s",
            tuning.sectors.len(),
            tuning.column_gap,
            tuning.time_budget_secs
        );
        Ok(tuning)
    }

    /// Reject layouts the simulation cannot recover from
    pub fn validate(&self) -> Result<(), TuningError> {
        let positives = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("column_width", self.column_width),
            ("column_interval", self.column_interval),
            ("column_gap", self.column_gap),
            ("scroll_speed", self.scroll_speed),
        ];
        for (name, value) in positives {
            // `!(v > 0)` also catches NaN
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { name, value });
            }
        }

        if self.column_gap >= self.world_height {
            return Err(TuningError::GapTooLarge {
                gap: self.column_gap,
                height: self.world_height,
            });
        }
        if self.gap_margin < 0.0 || self.max_gap_top() < self.gap_margin {
            return Err(TuningError::NoRoomForGap {
                gap: self.column_gap,
                margin: self.gap_margin,
                height: self.world_height,
            });
        }

        // The rightmost column waits at `world_width - interval` before the
        // next spawns; its trailing edge must still be ahead of the craft
        let limit = self.world_width - self.craft_x + self.column_width;
        if self.column_interval >= limit {
            return Err(TuningError::ColumnsTooSparse {
                interval: self.column_interval,
                limit,
            });
        }

        if !(self.victory_cooldown_secs >= 0.0) {
            return Err(TuningError::InvalidCooldown(self.victory_cooldown_secs));
        }

        let (hit_w, hit_h) = self.hitbox_size();
        if hit_w <= 0.0 || hit_h < 0.0 {
            return Err(TuningError::HitboxCollapsed {
                padding: self.hitbox_padding,
                width: self.craft_width,
                height: self.craft_height,
            });
        }

        if self.sectors.is_empty() {
            return Err(TuningError::NoSectors);
        }
        let mut previous = 0;
        for (index, sector) in self.sectors.iter().enumerate() {
            if sector.required_columns == 0 {
                return Err(TuningError::EmptySector { index });
            }
            if sector.required_columns < previous {
                return Err(TuningError::DecreasingSectors {
                    index,
                    required: sector.required_columns,
                });
            }
            previous = sector.required_columns;
        }

        Ok(())
    }

    /// Largest `gap_top` that keeps the gap clear of the bottom margin
    #[inline]
    pub fn max_gap_top(&self) -> f32 {
        self.world_height - self.column_gap - self.gap_margin
    }

    /// Hitbox width and height after padding
    #[inline]
    pub fn hitbox_size(&self) -> (f32, f32) {
        (
            self.craft_width - 2.0 * self.hitbox_padding,
            self.craft_height - 2.0 * self.hitbox_padding,
        )
    }

    /// Sector config, clamped to the last sector
    pub fn sector(&self, level: usize) -> &Sector {
        let index = level.min(self.sectors.len().saturating_sub(1));
        &self.sectors[index]
    }

    #[inline]
    pub fn is_last_sector(&self, level: usize) -> bool {
        level + 1 >= self.sectors.len()
    }

    #[inline]
    pub fn victory_cooldown_ms(&self) -> f64 {
        self.victory_cooldown_secs * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_default_sectors_non_decreasing() {
        let tuning = Tuning::default();
        let required: Vec<u32> = tuning.sectors.iter().map(|s| s.required_columns).collect();
        assert_eq!(required, vec![1, 3, 5]);
        assert!(required.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_gap_filling_world_rejected() {
        let tuning = Tuning {
            column_gap: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::GapTooLarge { .. })
        ));
    }

    #[test]
    fn test_gap_without_margin_room_rejected() {
        let tuning = Tuning {
            column_gap: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NoRoomForGap { .. })
        ));
    }

    #[test]
    fn test_decreasing_sectors_rejected() {
        let tuning = Tuning {
            sectors: vec![Sector::new(3, "A", ""), Sector::new(2, "B", "")],
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::DecreasingSectors {
                index: 1,
                required: 2
            })
        ));
    }

    #[test]
    fn test_empty_sectors_rejected() {
        let tuning = Tuning {
            sectors: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::NoSectors)));
    }

    #[test]
    fn test_nan_speed_rejected() {
        let tuning = Tuning {
            scroll_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotPositive {
                name: "scroll_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_from_json_partial_override() {
        let tuning = Tuning::from_json(r#"{ "time_budget_secs": 30, "column_gap": 180.0 }"#)
            .expect("valid overrides");
        assert_eq!(tuning.time_budget_secs, 30);
        assert_eq!(tuning.column_gap, 180.0);
        assert_eq!(tuning.world_height, WORLD_HEIGHT);
        assert_eq!(tuning.sectors.len(), 3);
    }

    #[test]
    fn test_from_json_rejects_degenerate_gap() {
        let err = Tuning::from_json(r#"{ "column_gap": 900.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::GapTooLarge { .. }));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Tuning::from_json("not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        // The serde_json error stays reachable as the source
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_sparse_columns_rejected() {
        // Defaults allow intervals below 390 - 110 + 46 = 326
        for interval in [326.0, 330.0, 1000.0] {
            let tuning = Tuning {
                column_interval: interval,
                ..Default::default()
            };
            assert!(matches!(
                tuning.validate(),
                Err(TuningError::ColumnsTooSparse { limit, .. }) if limit == 326.0
            ));
        }

        let tuning = Tuning {
            column_interval: 320.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_broken_cooldown_rejected() {
        for secs in [f64::NAN, -1.0] {
            let tuning = Tuning {
                victory_cooldown_secs: secs,
                ..Default::default()
            };
            assert!(matches!(
                tuning.validate(),
                Err(TuningError::InvalidCooldown(_))
            ));
        }

        let tuning = Tuning {
            victory_cooldown_secs: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_from_json_star_drift_override() {
        let tuning = Tuning::from_json(r#"{ "star_idle_drift": 1.25 }"#).expect("valid overrides");
        assert_eq!(tuning.star_idle_drift, 1.25);
        assert_eq!(Tuning::default().star_idle_drift, STAR_IDLE_DRIFT);
    }

    #[test]
    fn test_sector_lookup_clamps() {
        let tuning = Tuning::default();
        assert_eq!(tuning.sector(0).required_columns, 1);
        assert_eq!(tuning.sector(99).required_columns, 5);
        assert!(!tuning.is_last_sector(1));
        assert!(tuning.is_last_sector(2));
    }
}
