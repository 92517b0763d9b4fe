//! Craft hitbox tests
//!
//! The hitbox is the craft's bounding box shrunk by `hitbox_padding` on every
//! side, so grazing a column edge is forgiven. Everything here is pure.

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Axis-aligned hitbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Hitbox {
    /// Shrunk hitbox of the craft centered at `(craft_x, craft_y)`
    pub fn craft(craft_y: f32, tuning: &Tuning) -> Self {
        let half_w = tuning.craft_width / 2.0 - tuning.hitbox_padding;
        let half_h = tuning.craft_height / 2.0 - tuning.hitbox_padding;
        Self {
            left: tuning.craft_x - half_w,
            right: tuning.craft_x + half_w,
            top: craft_y - half_h,
            bottom: craft_y + half_h,
        }
    }

    /// Outside `[0, world_height]` vertically
    #[inline]
    pub fn out_of_bounds(&self, tuning: &Tuning) -> bool {
        self.top < 0.0 || self.bottom > tuning.world_height
    }

    /// Overlaps either block of the column
    pub fn hits(&self, obstacle: &Obstacle, tuning: &Tuning) -> bool {
        obstacle.overlaps_x(self.left, self.right, tuning)
            && (self.top < obstacle.gap_top || self.bottom > obstacle.gap_bottom(tuning))
    }
}

/// True if the craft at `craft_y` is out of the world or inside a column
pub fn check_collision(craft_y: f32, obstacles: &[Obstacle], tuning: &Tuning) -> bool {
    let hitbox = Hitbox::craft(craft_y, tuning);
    hitbox.out_of_bounds(tuning) || obstacles.iter().any(|o| hitbox.hits(o, tuning))
}
