//! Lane Merge - a lane-dodging merge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, game state)
//! - `engine`: Owned game instance driven by the host frame clock
//! - `driver`: Frame pacing (per-frame or fixed timestep)
//! - `renderer`: Draw-list and vertex generation for a rendering host
//! - `platform`: Host input translation
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod engine;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use engine::Engine;
pub use tuning::{TimingMode, Tuning, TuningError};

/// Playfield geometry constants
pub mod consts {
    /// Nominal tick length (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the fixed-step driver will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 420.0;
    pub const FIELD_HEIGHT: f32 = 640.0;
    /// Margin between the playfield edge and the road
    pub const ROAD_PADDING: f32 = 40.0;

    /// Player hitbox (square), anchored this far above the bottom edge
    pub const PLAYER_SIZE: f32 = 84.0;
    pub const PLAYER_BOTTOM_OFFSET: f32 = 100.0;

    /// Entity hitbox (square, same for blocks and coins)
    pub const ENTITY_SIZE: f32 = 68.0;
    /// Spawn height (just above the visible field)
    pub const SPAWN_Y: f32 = -40.0;
    /// Entities further than this past the bottom edge are discarded
    pub const DESPAWN_MARGIN: f32 = 60.0;

    /// Lane the player starts in after a reset
    pub const START_LANE: usize = 1;
    /// Upper bound on configurable lanes. Beyond this a neighbouring lane's
    /// entity hitbox reaches into the player's.
    pub const MAX_LANES: usize = 4;

    /// Score multipliers
    pub const MERGE_SCORE: u64 = 100;
    pub const CRUSH_SCORE: u64 = 25;
}

/// Width of a single lane for the given lane count
#[inline]
pub fn lane_width(lane_count: usize) -> f32 {
    (consts::FIELD_WIDTH - consts::ROAD_PADDING * 2.0) / lane_count as f32
}

/// Horizontal centre of a lane
#[inline]
pub fn lane_center(lane: usize, lane_count: usize) -> f32 {
    let width = lane_width(lane_count);
    consts::ROAD_PADDING + width * lane as f32 + width / 2.0
}
