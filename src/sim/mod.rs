//! Frame-driven simulation module
//!
//! All gameplay logic lives here. Rules that keep it testable:
//! - One integration step per tick, no time-delta scaling
//! - Randomness comes from an injected RNG only
//! - Frame timestamps and the wall clock are separate inputs
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod obstacles;
pub mod particles;
pub mod physics;
pub mod progression;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
#[cfg(not(target_arch = "wasm32"))]
pub use clock::SystemClock;
pub use clock::{ManualClock, WallClock};
pub use collision::{Hitbox, check_collision};
pub use obstacles::{advance_obstacles, initial_obstacles};
pub use particles::{spawn_particles, tick_particles};
pub use progression::Command;
pub use session::Session;
pub use snapshot::{ObstacleView, Rect, Snapshot};
pub use state::{GamePhase, GameState, Obstacle, Particle, Star};
pub use tick::{TickInput, tick};
