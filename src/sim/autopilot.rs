//! Demo autopilot
//!
//! Picks a lane by looking at the next entity that will reach the player in
//! each lane. Used by the headless runner and attract mode; the simulation
//! never calls it.

use super::collision::player_rect;
use super::state::{EntityKind, GameState};
use crate::consts::{ENTITY_SIZE, PLAYER_SIZE};
use crate::platform::input::Steer;

/// How attractive a lane's next arrival is
fn lane_value(state: &GameState, lane: usize) -> i32 {
    let player_top = player_rect(lane, state.lane_count).min.y;
    let player_bottom = player_top + PLAYER_SIZE;

    // Lowest entity in this lane that has not yet passed the player
    let next = state
        .entities
        .iter()
        .filter(|e| e.lane == lane && e.y < player_bottom)
        .max_by(|a, b| a.y.total_cmp(&b.y));

    let Some(entity) = next else {
        return 0;
    };

    match entity.kind {
        EntityKind::Block { rank } if rank == state.player_rank => 30,
        EntityKind::Coin { .. } => 20,
        EntityKind::Block { rank } if rank < state.player_rank => 10,
        EntityKind::Block { .. } => {
            // Far-off threats matter less than imminent ones
            if entity.y + ENTITY_SIZE > player_top - 200.0 {
                -100
            } else {
                -5
            }
        }
    }
}

/// One lane step toward the most attractive lane, or `None` to stay put
pub fn choose_steer(state: &GameState) -> Option<Steer> {
    if state.is_over() {
        return None;
    }

    let current = state.player_lane;
    let current_value = lane_value(state, current);

    let mut best_lane = current;
    let mut best_value = current_value;
    for lane in 0..state.lane_count {
        let value = lane_value(state, lane);
        let closer = lane.abs_diff(current) < best_lane.abs_diff(current);
        if value > best_value || (value == best_value && closer) {
            best_lane = lane;
            best_value = value;
        }
    }

    if best_lane == current {
        return None;
    }

    let step = if best_lane > current {
        Steer::Right
    } else {
        Steer::Left
    };
    // Don't walk through an imminent crash on the way
    let next_lane = (current as i32 + step.delta()) as usize;
    if next_lane != best_lane && lane_value(state, next_lane) <= -100 {
        return None;
    }
    Some(step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Entity;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(&Tuning::default())
    }

    #[test]
    fn test_stays_when_nothing_around() {
        assert_eq!(choose_steer(&state()), None);
    }

    #[test]
    fn test_dodges_imminent_threat() {
        let mut s = state();
        s.entities.push(Entity::block(1, 1, 3).at(450.0));
        // Both neighbours are empty; nearest tie goes to lane 0 (scanned first)
        assert_eq!(choose_steer(&s), Some(Steer::Left));
    }

    #[test]
    fn test_seeks_merge() {
        let mut s = state();
        s.entities.push(Entity::block(1, 2, 1).at(200.0));
        assert_eq!(choose_steer(&s), Some(Steer::Right));
    }

    #[test]
    fn test_prefers_merge_over_coin() {
        let mut s = state();
        s.entities.push(Entity::coin(1, 0, 50).at(200.0));
        s.entities.push(Entity::block(2, 2, 1).at(200.0));
        assert_eq!(choose_steer(&s), Some(Steer::Right));
    }

    #[test]
    fn test_ignores_passed_entities() {
        let mut s = state();
        // Already below the player in lane 2
        s.entities.push(Entity::block(1, 2, 1).at(630.0));
        assert_eq!(choose_steer(&s), None);
    }

    #[test]
    fn test_no_steer_when_over() {
        let mut s = state();
        s.entities.push(Entity::block(1, 1, 3).at(450.0));
        s.phase = crate::sim::GamePhase::Over;
        assert_eq!(choose_steer(&s), None);
    }
}
