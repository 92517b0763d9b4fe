//! Session: sole owner of the live state
//!
//! Input handlers enqueue commands at any time; they are held until the next
//! tick boundary and never touch the state directly. Renderers only ever see
//! snapshots.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::clock::WallClock;
use super::progression::Command;
use super::snapshot::Snapshot;
use super::state::{GamePhase, GameState};
use super::tick::{TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// A running game
pub struct Session<C: WallClock, R: Rng = Pcg32> {
    tuning: Tuning,
    state: GameState,
    rng: R,
    clock: C,
    /// Latest meaningful command since the last tick
    pending: Option<Command>,
    last_timestamp_ms: f64,
}

impl<C: WallClock> Session<C, Pcg32> {
    /// Session with a seeded PCG stream
    pub fn seeded(tuning: Tuning, seed: u64, clock: C) -> Result<Self, TuningError> {
        Self::new(tuning, Pcg32::seed_from_u64(seed), clock)
    }
}

impl<C: WallClock, R: Rng> Session<C, R> {
    /// Validate the tuning and start on the title screen
    pub fn new(tuning: Tuning, mut rng: R, clock: C) -> Result<Self, TuningError> {
        tuning.validate()?;
        let state = GameState::fresh(&tuning, &mut rng, GamePhase::Idle);
        Ok(Self {
            tuning,
            state,
            rng,
            clock,
            pending: None,
            last_timestamp_ms: 0.0,
        })
    }

    /// Queue a command for the next tick
    ///
    /// Commands that mean nothing in the current phase are dropped so they
    /// cannot displace a meaningful one; otherwise the latest wins.
    pub fn enqueue(&mut self, command: Command) {
        let phase = self.state.phase;
        if !command.accepted_in(phase) {
            log::debug!("Dropped {:?} in {:?}", command, phase);
            return;
        }
        self.pending = Some(command.resolve(phase));
    }

    /// Run one frame and publish its snapshot
    pub fn tick(&mut self, timestamp_ms: f64) -> Snapshot {
        let input = TickInput {
            timestamp_ms,
            command: self.pending.take(),
        };
        tick(
            &mut self.state,
            &input,
            &self.tuning,
            &mut self.rng,
            &self.clock,
        );
        self.last_timestamp_ms = timestamp_ms;
        self.snapshot()
    }

    /// Snapshot of the state after the latest tick
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            &self.state,
            &self.tuning,
            self.last_timestamp_ms,
            self.clock.now_ms(),
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn pending(&self) -> Option<Command> {
        self.pending
    }
}
