//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`. Hosts only ever see
//! it through `Snapshot`.

use serde::{Deserialize, Serialize};

use crate::consts::{SPAWN_Y, START_LANE};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended; frozen until reset
    Over,
}

/// What a falling entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityKind {
    /// Ranked obstacle: merge, crush or crash depending on the player's rank
    Block { rank: u32 },
    /// Score bonus
    Coin { value: u32 },
}

/// A falling entity in one lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub lane: usize,
    /// Top edge of the hitbox; grows every tick
    pub y: f32,
    pub kind: EntityKind,
}

impl Entity {
    pub fn block(id: u32, lane: usize, rank: u32) -> Self {
        Self {
            id,
            lane,
            y: SPAWN_Y,
            kind: EntityKind::Block { rank },
        }
    }

    pub fn coin(id: u32, lane: usize, value: u32) -> Self {
        Self {
            id,
            lane,
            y: SPAWN_Y,
            kind: EntityKind::Coin { value },
        }
    }

    /// Place the entity at a given height (builder style, mostly for scenarios)
    pub fn at(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Block rank, if this is a block
    pub fn rank(&self) -> Option<u32> {
        match self.kind {
            EntityKind::Block { rank } => Some(rank),
            EntityKind::Coin { .. } => None,
        }
    }
}

/// Notifications produced by a tick, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    Spawned { id: u32, kind: EntityKind },
    CoinCollected { value: u32 },
    /// Player absorbed an equal-rank block and is now `rank`
    Merged { rank: u32 },
    /// Player flattened a weaker block
    Crushed { rank: u32, points: u64 },
    /// Player hit a stronger block; the run is over
    Crashed { rank: u32 },
}

impl GameEvent {
    /// Advisory text for the display
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::Merged { rank } => Some(format!("Merged! You are now level {rank}")),
            GameEvent::Crashed { rank } => {
                Some(format!("Crash! Block level {rank} was too strong."))
            }
            _ => None,
        }
    }
}

/// Complete world state for one session.
///
/// Only the simulation writes it (tick, lane changes, reset); everything
/// outside the crate reads through the accessors or a `Snapshot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Number of lanes (copied from tuning at creation)
    pub(crate) lane_count: usize,
    /// Player lane, always within `0..lane_count`
    pub(crate) player_lane: usize,
    /// Player strength, starts at 1
    pub(crate) player_rank: u32,
    pub(crate) score: u64,
    /// Fall speed applied to every entity each tick
    pub(crate) speed: f32,
    /// Ticks since the last spawn
    pub(crate) spawn_counter: u32,
    /// Ticks simulated since reset
    pub(crate) time_ticks: u64,
    pub(crate) phase: GamePhase,
    /// Active entities in spawn order
    pub(crate) entities: Vec<Entity>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh state at the start of a run
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            lane_count: tuning.lane_count,
            player_lane: START_LANE.min(tuning.lane_count.saturating_sub(1)),
            player_rank: 1,
            score: 0,
            speed: tuning.base_speed,
            spawn_counter: 0,
            time_ticks: 0,
            phase: GamePhase::Running,
            entities: Vec::new(),
            next_id: 1,
        }
    }

    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    pub fn player_lane(&self) -> usize {
        self.player_lane
    }

    pub fn player_rank(&self) -> u32 {
        self.player_rank
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Ticks since the last spawn
    pub fn spawn_counter(&self) -> u32 {
        self.spawn_counter
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Active entities in spawn order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Shift the player by `delta` lanes, clamped to the road.
    /// Returns whether the lane changed. Ignored once the run is over.
    pub fn move_lane(&mut self, delta: i32) -> bool {
        if self.is_over() || delta == 0 {
            return false;
        }
        let max_lane = self.lane_count.saturating_sub(1) as i64;
        let target = (self.player_lane as i64 + delta as i64).clamp(0, max_lane) as usize;
        let moved = target != self.player_lane;
        self.player_lane = target;
        moved
    }

    /// Borrowing view for hosts
    pub fn snapshot<'a>(&'a self, message: Option<&'a str>) -> Snapshot<'a> {
        Snapshot {
            lane_count: self.lane_count,
            player_lane: self.player_lane,
            player_rank: self.player_rank,
            score: self.score,
            speed: self.speed,
            is_over: self.is_over(),
            entities: &self.entities,
            message,
        }
    }
}

/// Read-only view of the world handed to renderers and other hosts
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub lane_count: usize,
    pub player_lane: usize,
    pub player_rank: u32,
    pub score: u64,
    pub speed: f32,
    pub is_over: bool,
    pub entities: &'a [Entity],
    pub message: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&Tuning::default());
        assert_eq!(state.player_lane, 1);
        assert_eq!(state.player_rank, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 3.0);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_move_lane_clamps() {
        let mut state = GameState::new(&Tuning::default());
        assert!(state.move_lane(-1));
        assert_eq!(state.player_lane, 0);
        assert!(!state.move_lane(-1));
        assert_eq!(state.player_lane, 0);
        assert!(state.move_lane(5));
        assert_eq!(state.player_lane, 2);
        assert!(!state.move_lane(1));
        assert_eq!(state.player_lane, 2);
    }

    #[test]
    fn test_move_lane_ignored_when_over() {
        let mut state = GameState::new(&Tuning::default());
        state.phase = GamePhase::Over;
        assert!(!state.move_lane(1));
        assert_eq!(state.player_lane, 1);
    }

    #[test]
    fn test_event_messages() {
        assert_eq!(
            GameEvent::Merged { rank: 4 }.message().as_deref(),
            Some("Merged! You are now level 4")
        );
        assert_eq!(
            GameEvent::Crashed { rank: 5 }.message().as_deref(),
            Some("Crash! Block level 5 was too strong.")
        );
        assert!(GameEvent::CoinCollected { value: 50 }.message().is_none());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(&Tuning::default());
        let id = state.next_entity_id();
        state.entities.push(Entity::coin(id, 2, 50));
        let json = serde_json::to_string(&state.snapshot(Some("hi"))).unwrap();
        assert!(json.contains("\"player_rank\":1"));
        assert!(json.contains("\"type\":\"coin\""));
        assert!(json.contains("\"message\":\"hi\""));
    }
}
