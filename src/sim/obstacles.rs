//! Column generation and scrolling
//!
//! Columns scroll left at one fixed speed, a new one is appended a fixed
//! interval behind the rightmost, and columns that have left the screen are
//! retired. Only the gap height is random.

use rand::Rng;

use super::state::Obstacle;
use crate::tuning::Tuning;

/// Random gap top, kept `gap_margin` away from both world edges
pub fn random_gap_top<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f32 {
    let min_top = tuning.gap_margin;
    let max_top = tuning.max_gap_top();
    if max_top <= min_top {
        return min_top;
    }
    rng.random_range(min_top..max_top)
}

/// Columns a life starts with: three, just past the right edge
pub fn initial_obstacles<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Vec<Obstacle> {
    let first_x = tuning.world_width + tuning.first_column_lead_in;
    (0..3)
        .map(|i| {
            let x = first_x + tuning.column_interval * i as f32;
            Obstacle::new(x, random_gap_top(tuning, rng))
        })
        .collect()
}

/// Scroll every column, append behind the rightmost, retire off-screen ones
pub fn advance_obstacles<R: Rng + ?Sized>(
    obstacles: &mut Vec<Obstacle>,
    tuning: &Tuning,
    rng: &mut R,
) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= tuning.scroll_speed;
    }

    match obstacles.last().map(|o| o.x) {
        Some(last_x) if last_x < tuning.world_width - tuning.column_interval => {
            let x = last_x + tuning.column_interval;
            let gap_top = random_gap_top(tuning, rng);
            log::debug!("Spawned column at x={:.1} gap_top={:.1}", x, gap_top);
            obstacles.push(Obstacle::new(x, gap_top));
        }
        Some(_) => {}
        None => {
            // Everything was retired; restart the stream at the right edge
            let x = tuning.world_width;
            obstacles.push(Obstacle::new(x, random_gap_top(tuning, rng)));
        }
    }

    let retire_at = -tuning.column_width - tuning.retire_slack;
    obstacles.retain(|o| o.x > retire_at);
}
