//! Data-driven game balance
//!
//! Defaults reproduce the classic feel: three lanes, a slow linear speed ramp
//! and a spawn every 35 ticks. Hosts may override any field from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_LANES, SIM_DT};

/// How the host frame clock maps onto simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimingMode {
    /// One tick per host frame. Game speed follows the display refresh rate.
    #[default]
    PerFrame,
    /// Accumulate wall-clock time and tick at a fixed rate
    FixedStep { hz: f32 },
}

impl TimingMode {
    /// Seconds per tick for fixed-step timing
    pub fn step_secs(&self) -> f32 {
        match *self {
            TimingMode::PerFrame => SIM_DT,
            TimingMode::FixedStep { hz } => 1.0 / hz,
        }
    }
}

/// Configuration problems found while loading or validating a `Tuning`
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("lane count {0} is outside 2..={max}", max = MAX_LANES)]
    LaneCount(usize),

    #[error("base speed must be a positive finite number, got {0}")]
    BaseSpeed(f32),

    #[error("speed ramp must be a non-negative finite number, got {0}")]
    SpeedRamp(f32),

    #[error("spawn interval must be at least one tick")]
    SpawnInterval,

    #[error("coin chance must be within [0, 1], got {0}")]
    CoinChance(f64),

    #[error("coin value must be positive")]
    CoinValue,

    #[error("minimum rank ceiling must be at least 1")]
    RankCeiling,

    #[error("fixed-step rate must be a positive finite number, got {0}")]
    StepRate(f32),

    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Number of parallel lanes
    pub lane_count: usize,
    /// Entity fall speed after a reset (units per tick)
    pub base_speed: f32,
    /// Speed added every tick, uncapped
    pub speed_ramp: f32,
    /// Ticks between spawns
    pub spawn_interval: u32,
    /// Probability that a spawn is a coin instead of a block
    pub coin_chance: f64,
    /// Score granted by a coin
    pub coin_value: u32,
    /// Blocks may spawn up to this many ranks above the player
    pub rank_headroom: u32,
    /// Block rank ceiling never drops below this
    pub min_rank_ceiling: u32,
    /// Frame pacing
    pub timing: TimingMode,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_count: 3,
            base_speed: 3.0,
            speed_ramp: 0.0008,
            spawn_interval: 35,
            coin_chance: 0.15,
            coin_value: 50,
            rank_headroom: 2,
            min_rank_ceiling: 2,
            timing: TimingMode::PerFrame,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every field against the ranges the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(2..=MAX_LANES).contains(&self.lane_count) {
            return Err(TuningError::LaneCount(self.lane_count));
        }
        if !(self.base_speed.is_finite() && self.base_speed > 0.0) {
            return Err(TuningError::BaseSpeed(self.base_speed));
        }
        if !(self.speed_ramp.is_finite() && self.speed_ramp >= 0.0) {
            return Err(TuningError::SpeedRamp(self.speed_ramp));
        }
        if self.spawn_interval == 0 {
            return Err(TuningError::SpawnInterval);
        }
        if !(0.0..=1.0).contains(&self.coin_chance) {
            return Err(TuningError::CoinChance(self.coin_chance));
        }
        if self.coin_value == 0 {
            return Err(TuningError::CoinValue);
        }
        if self.min_rank_ceiling == 0 {
            return Err(TuningError::RankCeiling);
        }
        if let TimingMode::FixedStep { hz } = self.timing {
            if !(hz.is_finite() && hz > 0.0) {
                return Err(TuningError::StepRate(hz));
            }
        }
        Ok(())
    }

    /// Highest block rank that may spawn against a player of `player_rank`
    pub fn rank_ceiling(&self, player_rank: u32) -> u32 {
        self.min_rank_ceiling
            .max(player_rank.saturating_add(self.rank_headroom))
    }
}
