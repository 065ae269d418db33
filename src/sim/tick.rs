//! Simulation tick
//!
//! One call advances the world by exactly one step, independent of wall time.

use super::collision::{entity_rect, is_offscreen, player_rect, resolve};
use super::rng::RandomSource;
use super::spawner;
use super::state::{GameEvent, GameState};
use crate::tuning::Tuning;

/// Advance the game state by one tick and return what happened.
///
/// Order: timers and speed ramp, spawn, motion, then a single pass that
/// prunes off-screen entities and resolves contacts with the player.
/// A finished run is left untouched.
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState,
    tuning: &Tuning,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    state.time_ticks += 1;
    state.speed += tuning.speed_ramp;

    if let Some(event) = spawner::run(state, tuning, rng) {
        events.push(event);
    }

    for entity in &mut state.entities {
        entity.y += state.speed;
    }

    let player = player_rect(state.player_lane, state.lane_count);
    let entities = std::mem::take(&mut state.entities);
    let mut retained = Vec::with_capacity(entities.len());

    for entity in entities {
        if is_offscreen(&entity) {
            continue;
        }
        // After a crash nothing else scores; remaining entities stay put
        if state.is_over() {
            retained.push(entity);
            continue;
        }
        if player.intersects(&entity_rect(&entity, state.lane_count)) {
            events.push(resolve(state, &entity));
            continue;
        }
        retained.push(entity);
    }
    state.entities = retained;

    log::trace!(
        "tick {}: speed {:.4}, {} entities, score {}",
        state.time_ticks,
        state.speed,
        state.entities.len(),
        state.score
    );

    events
}
