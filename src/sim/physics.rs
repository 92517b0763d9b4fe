//! Craft integration and background scroll
//!
//! One explicit Euler step per tick. There is no dt: motion is tuned in
//! pixels per tick, so speed follows the display refresh rate.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Star};
use crate::tuning::Tuning;

/// Overwrite (never add to) the craft velocity with the jump impulse
///
/// Applied at the tick boundary, so the first step after a jump moves by
/// `jump_impulse + gravity`.
#[inline]
pub fn jump(state: &mut GameState, tuning: &Tuning) {
    state.craft_vy = tuning.jump_impulse;
}

/// Advance craft velocity and position by one tick
pub fn integrate_craft(state: &mut GameState, tuning: &Tuning) {
    state.craft_vy += tuning.gravity;
    state.craft_y += state.craft_vy;
}

/// Random starfield covering the world
pub fn make_stars<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Vec<Star> {
    (0..tuning.star_count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random::<f32>() * tuning.world_width,
                rng.random::<f32>() * tuning.world_height,
            ),
            radius: rng.random::<f32>() * 1.5 + 0.3,
            speed: rng.random::<f32>() * 0.4 + 0.15,
            opacity: rng.random::<f32>() * 0.6 + 0.2,
        })
        .collect()
}

/// Parallax scroll while Playing; wrapped stars get a new height
pub fn scroll_stars<R: Rng + ?Sized>(stars: &mut [Star], tuning: &Tuning, rng: &mut R) {
    for star in stars.iter_mut() {
        star.pos.x -= star.speed;
        if star.pos.x < 0.0 {
            star.pos.x = tuning.world_width;
            star.pos.y = rng.random::<f32>() * tuning.world_height;
        }
    }
}

/// Slow uniform drift behind overlays
pub fn drift_stars(stars: &mut [Star], tuning: &Tuning) {
    for star in stars.iter_mut() {
        star.pos.x -= tuning.star_idle_drift;
        if star.pos.x < 0.0 {
            star.pos.x = tuning.world_width;
        }
    }
}
