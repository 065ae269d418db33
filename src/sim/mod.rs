//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per `tick` call, no wall-clock time
//! - Injected randomness only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rng;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, entity_rect, player_rect};
pub use rng::{RandomSource, SequenceRandom, seeded};
pub use state::{Entity, EntityKind, GameEvent, GamePhase, GameState, Snapshot};
pub use tick::tick;
