//! Demo mode - a simple controller that plays the game
//!
//! Works purely from a [`Snapshot`], exactly like a human looking at the
//! screen: hold the craft a little below the center of the next gap and
//! acknowledge every overlay.

use super::progression::Command;
use super::snapshot::{ObstacleView, Snapshot};
use super::state::GamePhase;

/// How far below the gap center the craft may sink before jumping
const SINK_ALLOWANCE: f32 = 40.0;

/// First column the hitbox has not fully cleared yet
pub fn next_obstacle(snapshot: &Snapshot) -> Option<&ObstacleView> {
    let hitbox_left = snapshot.hitbox.x;
    snapshot
        .obstacles
        .iter()
        .find(|o| o.x + o.top.w > hitbox_left)
}

/// Command the demo player would issue before the next tick
pub fn autopilot(snapshot: &Snapshot) -> Option<Command> {
    match snapshot.phase {
        GamePhase::Idle => Some(Command::Start),
        GamePhase::LevelClear => Some(Command::ContinueLevel),
        GamePhase::Dead | GamePhase::TimesUp => Some(Command::Retry),
        GamePhase::Victory => snapshot
            .can_restart()
            .then_some(Command::RestartAfterVictory),
        GamePhase::Playing => {
            let target = next_obstacle(snapshot)
                .map(|o| (o.gap_top + o.gap_bottom) / 2.0)
                .unwrap_or(snapshot.world_height / 2.0);
            // Only jump while falling so jumps chain at the apex
            let sinking = snapshot.craft_y > target + SINK_ALLOWANCE && snapshot.craft_vy >= 0.0;
            sinking.then_some(Command::Jump)
        }
    }
}
