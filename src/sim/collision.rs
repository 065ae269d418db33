//! Hitboxes and collision resolution
//!
//! Everything is axis-aligned: the player and every entity are squares
//! centred on their lane. Overlap is strict, so touching edges do not count.

use glam::Vec2;

use super::state::{Entity, EntityKind, GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::lane_center;

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Strict overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && a_max.x > other.min.x
            && self.min.y < b_max.y
            && a_max.y > other.min.y
    }
}

/// Player hitbox for the given lane
pub fn player_rect(lane: usize, lane_count: usize) -> Rect {
    Rect::new(
        lane_center(lane, lane_count) - PLAYER_SIZE / 2.0,
        FIELD_HEIGHT - PLAYER_BOTTOM_OFFSET,
        PLAYER_SIZE,
        PLAYER_SIZE,
    )
}

/// Entity hitbox at its current height
pub fn entity_rect(entity: &Entity, lane_count: usize) -> Rect {
    Rect::new(
        lane_center(entity.lane, lane_count) - ENTITY_SIZE / 2.0,
        entity.y,
        ENTITY_SIZE,
        ENTITY_SIZE,
    )
}

/// True once an entity has fallen far enough past the bottom edge to discard
#[inline]
pub fn is_offscreen(entity: &Entity) -> bool {
    entity.y > FIELD_HEIGHT + DESPAWN_MARGIN
}

/// Apply the outcome of `entity` touching the player.
///
/// The entity is consumed in every case. Outcomes are judged against the
/// player's rank at the moment of contact, so an earlier merge in the same
/// tick raises the bar for later entities.
pub fn resolve(state: &mut GameState, entity: &Entity) -> GameEvent {
    match entity.kind {
        EntityKind::Coin { value } => {
            state.score += u64::from(value);
            GameEvent::CoinCollected { value }
        }
        EntityKind::Block { rank } if rank == state.player_rank => {
            state.player_rank += 1;
            state.score += MERGE_SCORE * u64::from(state.player_rank);
            log::info!("merged into rank {}", state.player_rank);
            GameEvent::Merged {
                rank: state.player_rank,
            }
        }
        EntityKind::Block { rank } if rank < state.player_rank => {
            let points = CRUSH_SCORE * u64::from(rank);
            state.score += points;
            GameEvent::Crushed { rank, points }
        }
        EntityKind::Block { rank } => {
            state.phase = GamePhase::Over;
            log::info!(
                "crashed into rank {} block as rank {} (score {})",
                rank,
                state.player_rank,
                state.score
            );
            GameEvent::Crashed { rank }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(&Tuning::default())
    }

    #[test]
    fn test_rect_intersection_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(9.0, 9.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(-20.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_hitboxes_centred_on_lane() {
        let p = player_rect(1, 3);
        assert!((p.center().x - lane_center(1, 3)).abs() < 1e-4);
        assert_eq!(p.min.y, FIELD_HEIGHT - PLAYER_BOTTOM_OFFSET);

        let e = Entity::block(1, 1, 1).at(100.0);
        let r = entity_rect(&e, 3);
        assert!((r.center().x - lane_center(1, 3)).abs() < 1e-4);
        assert_eq!(r.min.y, 100.0);
    }

    #[test]
    fn test_adjacent_lanes_never_overlap() {
        for lanes in 2..=MAX_LANES {
            let p = player_rect(0, lanes);
            let mut e = Entity::block(1, 1, 1);
            e.y = p.min.y;
            assert!(!p.intersects(&entity_rect(&e, lanes)), "lanes={lanes}");
        }
    }

    #[test]
    fn test_vertical_overlap_window() {
        let p = player_rect(1, 3);
        // Entity bottom exactly at player top: no contact
        let e = Entity::block(1, 1, 1).at(p.min.y - ENTITY_SIZE);
        assert!(!p.intersects(&entity_rect(&e, 3)));
        let e = e.at(p.min.y - ENTITY_SIZE + 0.5);
        assert!(p.intersects(&entity_rect(&e, 3)));
    }

    #[test]
    fn test_resolve_coin() {
        let mut s = state();
        s.player_rank = 3;
        let event = resolve(&mut s, &Entity::coin(1, 1, 50));
        assert_eq!(event, GameEvent::CoinCollected { value: 50 });
        assert_eq!(s.score, 50);
        assert_eq!(s.player_rank, 3);
    }

    #[test]
    fn test_resolve_merge() {
        let mut s = state();
        let event = resolve(&mut s, &Entity::block(1, 1, 1));
        assert_eq!(event, GameEvent::Merged { rank: 2 });
        assert_eq!(s.player_rank, 2);
        assert_eq!(s.score, 200);
    }

    #[test]
    fn test_resolve_crush() {
        let mut s = state();
        s.player_rank = 4;
        let event = resolve(&mut s, &Entity::block(1, 1, 2));
        assert_eq!(event, GameEvent::Crushed { rank: 2, points: 50 });
        assert_eq!(s.score, 50);
        assert_eq!(s.player_rank, 4);
    }

    #[test]
    fn test_resolve_crash() {
        let mut s = state();
        s.player_rank = 3;
        s.score = 700;
        let event = resolve(&mut s, &Entity::block(1, 1, 5));
        assert_eq!(event, GameEvent::Crashed { rank: 5 });
        assert_eq!(s.phase, GamePhase::Over);
        assert_eq!(s.score, 700);
        assert_eq!(s.player_rank, 3);
    }

    #[test]
    fn test_offscreen_threshold() {
        let e = Entity::coin(1, 0, 50).at(FIELD_HEIGHT + DESPAWN_MARGIN);
        assert!(!is_offscreen(&e));
        assert!(is_offscreen(&e.at(FIELD_HEIGHT + DESPAWN_MARGIN + 0.1)));
    }
}
