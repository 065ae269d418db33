//! Spawning of falling blocks and coins

use super::rng::RandomSource;
use super::state::{Entity, GameEvent, GameState};
use crate::tuning::Tuning;

/// Advance the spawn timer and append a new entity when it fires.
///
/// Returns the spawn event, if any.
pub fn run<R: RandomSource + ?Sized>(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<GameEvent> {
    state.spawn_counter += 1;
    if state.spawn_counter < tuning.spawn_interval {
        return None;
    }
    state.spawn_counter = 0;

    let entity = roll_entity(state, tuning, rng);
    let event = GameEvent::Spawned {
        id: entity.id,
        kind: entity.kind,
    };
    log::debug!(
        "spawned {:?} in lane {} at tick {}",
        entity.kind,
        entity.lane,
        state.time_ticks
    );
    state.entities.push(entity);
    Some(event)
}

/// Draw a new entity: kind first, then lane, then (blocks only) rank
pub fn roll_entity<R: RandomSource + ?Sized>(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut R,
) -> Entity {
    let is_coin = rng.next_unit() < tuning.coin_chance;
    let lane = rng.below(state.lane_count as u32) as usize;
    let id = state.next_entity_id();

    if is_coin {
        return Entity::coin(id, lane, tuning.coin_value);
    }

    let ceiling = tuning.rank_ceiling(state.player_rank);
    let rank = 1 + rng.below(ceiling);
    Entity::block(id, lane, rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SPAWN_Y;
    use crate::sim::rng::SequenceRandom;
    use crate::sim::state::EntityKind;

    #[test]
    fn test_fires_on_interval() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let mut rng = SequenceRandom::new([0.5]);

        for _ in 0..34 {
            assert!(run(&mut state, &tuning, &mut rng).is_none());
        }
        assert_eq!(state.spawn_counter, 34);
        assert!(run(&mut state, &tuning, &mut rng).is_some());
        assert_eq!(state.spawn_counter, 0);
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.entities[0].y, SPAWN_Y);
    }

    #[test]
    fn test_coin_roll() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        // kind < 0.15 -> coin, lane roll 0.9 -> lane 2
        let mut rng = SequenceRandom::new([0.1, 0.9]);
        let entity = roll_entity(&mut state, &tuning, &mut rng);
        assert_eq!(entity.kind, EntityKind::Coin { value: 50 });
        assert_eq!(entity.lane, 2);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_block_rank_range() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);

        // Rank 1 player: ceiling 3
        let mut rng = SequenceRandom::new([0.5, 0.0, 0.0]);
        assert_eq!(roll_entity(&mut state, &tuning, &mut rng).rank(), Some(1));
        let mut rng = SequenceRandom::new([0.5, 0.0, 0.999]);
        assert_eq!(roll_entity(&mut state, &tuning, &mut rng).rank(), Some(3));

        // Rank 4 player: ceiling 6
        state.player_rank = 4;
        let mut rng = SequenceRandom::new([0.5, 0.0, 0.999]);
        assert_eq!(roll_entity(&mut state, &tuning, &mut rng).rank(), Some(6));
    }

    #[test]
    fn test_coin_boundary_is_block() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let mut rng = SequenceRandom::new([0.15, 0.0, 0.0]);
        let entity = roll_entity(&mut state, &tuning, &mut rng);
        assert!(matches!(entity.kind, EntityKind::Block { .. }));
    }

    #[test]
    fn test_ids_are_unique() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let mut rng = SequenceRandom::new([0.3, 0.6, 0.2]);
        let a = roll_entity(&mut state, &tuning, &mut rng);
        let b = roll_entity(&mut state, &tuning, &mut rng);
        assert_ne!(a.id, b.id);
    }
}
