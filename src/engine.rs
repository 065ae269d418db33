//! Game engine: one owned session
//!
//! Bundles world state, tuning, the random source and the latest display
//! message. Hosts call `tick` once per simulated step and route input through
//! `steer` / `move_lane` / `apply`.

use rand_pcg::Pcg32;

use crate::platform::input::{Command, Steer};
use crate::sim::rng::{RandomSource, seeded};
use crate::sim::state::{GameEvent, GameState, Snapshot};
use crate::sim::tick;
use crate::tuning::{Tuning, TuningError};

pub struct Engine<R = Pcg32> {
    tuning: Tuning,
    state: GameState,
    rng: R,
    message: Option<String>,
}

impl Engine<Pcg32> {
    /// Engine seeded for reproducible runs
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Self::with_rng(tuning, seeded(seed))
    }

    /// Default tuning, seeded
    pub fn with_seed(seed: u64) -> Self {
        let tuning = Tuning::default();
        Self {
            state: GameState::new(&tuning),
            tuning,
            rng: seeded(seed),
            message: None,
        }
    }

    /// Reset and reseed
    pub fn restart(&mut self, seed: u64) {
        self.rng = seeded(seed);
        self.reset();
        log::info!("restarted with seed {seed}");
    }
}

impl<R: RandomSource> Engine<R> {
    /// Engine with a caller-supplied random source
    pub fn with_rng(tuning: Tuning, rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::new(&tuning),
            tuning,
            rng,
            message: None,
        })
    }

    /// Advance one step. Returns the events of this step (empty once over).
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state, &self.tuning, &mut self.rng);
        if let Some(message) = events.iter().rev().find_map(GameEvent::message) {
            self.message = Some(message);
        }
        events
    }

    /// Move one lane left or right. No-op at the edge or once over.
    pub fn steer(&mut self, direction: Steer) -> bool {
        self.state.move_lane(direction.delta())
    }

    /// Move by an arbitrary lane delta, clamped to the road
    pub fn move_lane(&mut self, delta: i32) -> bool {
        self.state.move_lane(delta)
    }

    /// Start a fresh run. Always allowed, even mid-game.
    pub fn reset(&mut self) {
        self.state = GameState::new(&self.tuning);
        self.message = None;
        log::info!("game reset");
    }

    /// Dispatch a host command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Steer(direction) => {
                self.steer(direction);
            }
            Command::Restart => self.reset(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot(self.message.as_deref())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }
}
