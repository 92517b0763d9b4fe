//! Phase machine, sector ladder and the shared countdown
//!
//! ```text
//! Idle --start--> Playing --passes--> LevelClear --continue--> Playing (next sector)
//!                    |  \--passes (last sector)--> Victory --restart (after cooldown)--> Idle
//!                    |--collision--> Dead --retry--> Playing
//!                    \--time out--> TimesUp --retry--> Playing
//! ```
//!
//! Every reset installs a newly built [`GameState`]; a live state is never
//! patched across a reset boundary.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::particles::spawn_particles;
use super::physics;
use super::state::{GamePhase, GameState};
use crate::consts::{COLOR_ERROR, COLOR_SUCCESS};
use crate::tuning::Tuning;

/// Discrete player intent, consumed at a tick boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Jump,
    ContinueLevel,
    Retry,
    RestartAfterVictory,
    /// Single-button input: whatever the current phase expects
    Tap,
}

impl Command {
    /// Map `Tap` onto the concrete command for `phase`
    pub fn resolve(self, phase: GamePhase) -> Command {
        if self != Command::Tap {
            return self;
        }
        match phase {
            GamePhase::Idle => Command::Start,
            GamePhase::Playing => Command::Jump,
            GamePhase::LevelClear => Command::ContinueLevel,
            GamePhase::Victory => Command::RestartAfterVictory,
            GamePhase::Dead | GamePhase::TimesUp => Command::Retry,
        }
    }

    /// Whether the command means anything in `phase`
    pub fn accepted_in(self, phase: GamePhase) -> bool {
        match self.resolve(phase) {
            Command::Start => phase == GamePhase::Idle,
            Command::Jump => phase == GamePhase::Playing,
            Command::ContinueLevel => phase == GamePhase::LevelClear,
            Command::Retry => matches!(phase, GamePhase::Dead | GamePhase::TimesUp),
            Command::RestartAfterVictory => phase == GamePhase::Victory,
            Command::Tap => false,
        }
    }
}

/// Apply a command at a tick boundary; returns false when it was a no-op
///
/// `wall_now_ms` is only consulted for the victory cooldown.
pub fn apply_command<R: Rng + ?Sized>(
    state: &mut GameState,
    command: Command,
    tuning: &Tuning,
    rng: &mut R,
    wall_now_ms: f64,
) -> bool {
    let phase = state.phase;
    if !command.accepted_in(phase) {
        log::debug!("Ignored {:?} in {:?}", command, phase);
        return false;
    }

    match command.resolve(phase) {
        Command::Jump => {
            physics::jump(state, tuning);
        }
        Command::Start | Command::Retry => {
            *state = GameState::fresh(tuning, rng, GamePhase::Playing);
            log::info!("{:?} -> Playing (full reset)", phase);
        }
        Command::ContinueLevel => {
            *state = state.next_sector(tuning, rng);
            log::info!(
                "LevelClear -> Playing: {} ({}s left)",
                tuning.sector(state.level).label,
                state.time_left
            );
        }
        Command::RestartAfterVictory => {
            let remaining = victory_cooldown_remaining(state, tuning, wall_now_ms);
            if remaining > 0.0 {
                log::debug!("Restart ignored, victory cooldown {:.0}ms left", remaining);
                return false;
            }
            *state = GameState::fresh(tuning, rng, GamePhase::Idle);
            log::info!("Victory -> Idle (full reset)");
        }
        Command::Tap => return false,
    }
    true
}

/// Milliseconds until a victory may be dismissed (0 once it may)
///
/// Before the first Victory tick has stamped the state, the full cooldown
/// remains.
pub fn victory_cooldown_remaining(state: &GameState, tuning: &Tuning, wall_now_ms: f64) -> f64 {
    let cooldown = tuning.victory_cooldown_ms();
    match state.victory_timestamp {
        Some(since) => (cooldown - (wall_now_ms - since).max(0.0)).max(0.0),
        None => cooldown,
    }
}

/// Whole-second countdown; returns true when the budget ran out this tick
///
/// The anchor advances by exactly the seconds consumed so fractional
/// remainders carry over. A timestamp earlier than the anchor counts as zero
/// elapsed and re-anchors.
pub fn update_timer(state: &mut GameState, timestamp_ms: f64) -> bool {
    let anchor = match state.last_tick_anchor {
        Some(anchor) if timestamp_ms >= anchor => anchor,
        Some(anchor) => {
            log::warn!(
                "Frame timestamp went backwards ({:.1} < {:.1}), re-anchoring",
                timestamp_ms,
                anchor
            );
            state.last_tick_anchor = Some(timestamp_ms);
            timestamp_ms
        }
        None => {
            state.last_tick_anchor = Some(timestamp_ms);
            timestamp_ms
        }
    };

    let whole_secs = ((timestamp_ms - anchor) / 1000.0).floor();
    if whole_secs >= 1.0 {
        state.time_left = state.time_left.saturating_sub(whole_secs as u32);
        state.last_tick_anchor = Some(anchor + whole_secs * 1000.0);
    }

    if state.time_left == 0 {
        state.phase = GamePhase::TimesUp;
        log::info!("Playing -> TimesUp in sector {}", state.level + 1);
        return true;
    }
    false
}

/// Flip newly passed columns and advance the phase when the sector is met
///
/// Stops at the first pass that completes the sector, so `columns_passed`
/// never runs past the requirement.
pub fn detect_passes<R: Rng + ?Sized>(state: &mut GameState, tuning: &Tuning, rng: &mut R) {
    let craft = Vec2::new(tuning.craft_x, state.craft_y);
    let required = state.required_columns(tuning);

    for i in 0..state.obstacles.len() {
        let obstacle = &mut state.obstacles[i];
        if obstacle.passed || obstacle.trailing_edge(tuning) >= tuning.craft_x {
            continue;
        }
        obstacle.passed = true;
        state.columns_passed += 1;
        spawn_particles(
            &mut state.particles,
            craft,
            COLOR_SUCCESS,
            tuning.pass_burst,
            tuning,
            rng,
        );
        log::debug!("Column passed ({}/{})", state.columns_passed, required);

        if state.columns_passed >= required {
            if tuning.is_last_sector(state.level) {
                state.phase = GamePhase::Victory;
                log::info!("Playing -> Victory with {}s left", state.time_left);
            } else {
                state.phase = GamePhase::LevelClear;
                log::info!(
                    "Playing -> LevelClear: {} done",
                    tuning.sector(state.level).label
                );
            }
            break;
        }
    }
}

/// Fatal collision: shake and an error-colored burst
pub fn enter_dead<R: Rng + ?Sized>(state: &mut GameState, tuning: &Tuning, rng: &mut R) {
    state.phase = GamePhase::Dead;
    state.death_shake = tuning.death_shake;
    let craft = Vec2::new(tuning.craft_x, state.craft_y);
    spawn_particles(
        &mut state.particles,
        craft,
        COLOR_ERROR,
        tuning.death_burst,
        tuning,
        rng,
    );
    log::info!(
        "Playing -> Dead in sector {} ({}/{} columns)",
        state.level + 1,
        state.columns_passed,
        state.required_columns(tuning)
    );
}

/// Shake decays linearly toward zero
#[inline]
pub fn decay_shake(state: &mut GameState, tuning: &Tuning) {
    state.death_shake = (state.death_shake - tuning.shake_decay).max(0.0);
}
