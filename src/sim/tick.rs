//! Per-frame simulation tick
//!
//! Runs every subsystem once, in a fixed order, for one display refresh.

use rand::Rng;

use super::clock::WallClock;
use super::collision::check_collision;
use super::obstacles::advance_obstacles;
use super::particles::tick_particles;
use super::physics::{drift_stars, integrate_craft, scroll_stars};
use super::progression::{Command, apply_command, decay_shake, detect_passes, enter_dead, update_timer};
use super::state::{GamePhase, GameState};
use crate::glow_pulse;
use crate::tuning::Tuning;

/// Glow pulse rates (radians per ms)
const PLAYING_GLOW_RATE: f64 = 0.003;
const OVERLAY_GLOW_RATE: f64 = 0.004;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Monotonic frame timestamp (ms) from the scheduler
    pub timestamp_ms: f64,
    /// Command collected since the previous tick
    pub command: Option<Command>,
}

/// Advance the game by one frame
///
/// Order within a tick:
/// 1. pending command (may replace the state wholesale)
/// 2. countdown; running out ends play for this tick
/// 3. craft physics and starfield
/// 4. column scroll, spawn and retire
/// 5. pass detection, possibly LevelClear or Victory
/// 6. particles, in every phase
/// 7. collision, only if still Playing
/// 8. overlay upkeep for every other phase
///
/// Progression in step 5 wins over a collision in the same tick.
pub fn tick<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    rng: &mut R,
    clock: &dyn WallClock,
) {
    if let Some(command) = input.command {
        apply_command(state, command, tuning, rng, clock.now_ms());
    }

    if state.phase == GamePhase::Playing && !update_timer(state, input.timestamp_ms) {
        integrate_craft(state, tuning);
        state.glow_pulse = glow_pulse(input.timestamp_ms, PLAYING_GLOW_RATE);
        scroll_stars(&mut state.stars, tuning, rng);

        advance_obstacles(&mut state.obstacles, tuning, rng);
        detect_passes(state, tuning, rng);
    }

    tick_particles(&mut state.particles, tuning);

    if state.phase == GamePhase::Playing && check_collision(state.craft_y, &state.obstacles, tuning)
    {
        enter_dead(state, tuning, rng);
    }

    if state.phase != GamePhase::Playing {
        decay_shake(state, tuning);
        state.glow_pulse = glow_pulse(input.timestamp_ms, OVERLAY_GLOW_RATE);
        drift_stars(&mut state.stars, tuning);
        if state.phase == GamePhase::Victory && state.victory_timestamp.is_none() {
            let now = clock.now_ms();
            state.victory_timestamp = Some(now);
            log::info!("Victory recorded at {:.0}ms", now);
        }
    }
}
