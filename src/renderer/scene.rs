//! Draw list for one frame

use glam::Vec2;
use serde::Serialize;

use super::vertex::{Color, colors};
use crate::consts::*;
use crate::sim::collision::player_rect;
use crate::sim::state::{EntityKind, Snapshot};
use crate::{lane_center, lane_width};

/// Lane divider dash pattern (dash, gap)
pub const LANE_DASH: [f32; 2] = [18.0, 14.0];

/// A single drawing primitive. Coordinates are playfield units, y down.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DrawCmd {
    Rect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeRect {
        min: Vec2,
        size: Vec2,
        width: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: Option<[f32; 2]>,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Centred horizontally on `pos.x`, baseline at `pos.y`
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        bold: bool,
        color: Color,
    },
}

/// Text shown outside the playfield
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: String,
    pub level: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub commands: Vec<DrawCmd>,
    pub hud: Hud,
}

/// Build the frame for a snapshot: road, entities, player, then overlay
pub fn build_scene(snapshot: &Snapshot<'_>) -> Scene {
    let mut commands = Vec::with_capacity(snapshot.entities.len() * 2 + 16);
    road(&mut commands, snapshot.lane_count);

    for entity in snapshot.entities {
        let x = lane_center(entity.lane, snapshot.lane_count);
        let y = entity.y;
        match entity.kind {
            EntityKind::Coin { .. } => {
                commands.push(DrawCmd::Circle {
                    center: Vec2::new(x, y + ENTITY_SIZE / 2.0),
                    radius: 24.0,
                    color: colors::COIN,
                });
                commands.push(DrawCmd::Text {
                    pos: Vec2::new(x, y + 41.0),
                    text: "$".to_string(),
                    size: 20.0,
                    bold: true,
                    color: colors::COIN_LABEL,
                });
            }
            EntityKind::Block { rank } => {
                commands.push(DrawCmd::Rect {
                    min: Vec2::new(x - ENTITY_SIZE / 2.0, y),
                    size: Vec2::splat(ENTITY_SIZE),
                    color: colors::rank(rank),
                });
                commands.push(DrawCmd::Text {
                    pos: Vec2::new(x, y + 44.0),
                    text: rank.to_string(),
                    size: 28.0,
                    bold: true,
                    color: colors::BLOCK_LABEL,
                });
            }
        }
    }

    let player = player_rect(snapshot.player_lane, snapshot.lane_count);
    commands.push(DrawCmd::Rect {
        min: player.min,
        size: player.size,
        color: colors::rank(snapshot.player_rank),
    });
    commands.push(DrawCmd::Text {
        pos: Vec2::new(player.center().x, player.min.y + 54.0),
        text: snapshot.player_rank.to_string(),
        size: 34.0,
        bold: true,
        color: colors::PLAYER_LABEL,
    });

    if snapshot.is_over {
        game_over_overlay(&mut commands);
    }

    Scene {
        commands,
        hud: Hud {
            score: snapshot.score.to_string(),
            level: snapshot.player_rank.to_string(),
            message: snapshot.message.unwrap_or_default().to_string(),
        },
    }
}

fn road(commands: &mut Vec<DrawCmd>, lane_count: usize) {
    let min = Vec2::new(ROAD_PADDING, 0.0);
    let size = Vec2::new(FIELD_WIDTH - ROAD_PADDING * 2.0, FIELD_HEIGHT);
    commands.push(DrawCmd::Rect {
        min,
        size,
        color: colors::ROAD,
    });
    commands.push(DrawCmd::StrokeRect {
        min,
        size,
        width: 4.0,
        color: colors::ROAD_BORDER,
    });

    let width = lane_width(lane_count);
    for i in 1..lane_count {
        let x = ROAD_PADDING + width * i as f32;
        commands.push(DrawCmd::Line {
            from: Vec2::new(x, 0.0),
            to: Vec2::new(x, FIELD_HEIGHT),
            width: 3.0,
            dash: Some(LANE_DASH),
            color: colors::LANE_DIVIDER,
        });
    }
}

fn game_over_overlay(commands: &mut Vec<DrawCmd>) {
    let center = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
    commands.push(DrawCmd::Rect {
        min: Vec2::ZERO,
        size: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        color: colors::OVERLAY,
    });
    commands.push(DrawCmd::Text {
        pos: center - Vec2::new(0.0, 10.0),
        text: "Game Over".to_string(),
        size: 42.0,
        bold: true,
        color: colors::TEXT,
    });
    commands.push(DrawCmd::Text {
        pos: center + Vec2::new(0.0, 24.0),
        text: "Press Restart".to_string(),
        size: 20.0,
        bold: false,
        color: colors::TEXT,
    });
}
