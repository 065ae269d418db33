//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::scene::{DrawCmd, Scene};
use super::vertex::{Color, Vertex};

/// Segments used for coins
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Triangulate every geometric command of a scene, in draw order.
/// Text commands produce no vertices.
pub fn tessellate(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for cmd in &scene.commands {
        match cmd {
            DrawCmd::Rect { min, size, color } => vertices.extend(rect(*min, *size, *color)),
            DrawCmd::StrokeRect {
                min,
                size,
                width,
                color,
            } => vertices.extend(stroke_rect(*min, *size, *width, *color)),
            DrawCmd::Line {
                from,
                to,
                width,
                dash,
                color,
            } => match dash {
                Some([on, off]) => {
                    vertices.extend(dashed_line(*from, *to, *width, *on, *off, *color))
                }
                None => vertices.extend(line(*from, *to, *width, *color)),
            },
            DrawCmd::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCmd::Text { .. } => {}
        }
    }
    vertices
}

/// Two triangles covering an axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: Color) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Rectangle outline, stroke centred on the edges
pub fn stroke_rect(min: Vec2, size: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let max = min + size;
    let h = width / 2.0;
    let mut vertices = Vec::with_capacity(24);
    let horizontal = Vec2::new(size.x + width, width);
    let vertical = Vec2::new(width, size.y - width);
    // top, bottom
    vertices.extend(rect(Vec2::new(min.x - h, min.y - h), horizontal, color));
    vertices.extend(rect(Vec2::new(min.x - h, max.y - h), horizontal, color));
    // left, right (between the horizontal bars)
    vertices.extend(rect(Vec2::new(min.x - h, min.y + h), vertical, color));
    vertices.extend(rect(Vec2::new(max.x - h, min.y + h), vertical, color));
    vertices
}

/// Thick segment as a quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;
    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Segment broken into `on`-long dashes separated by `off` gaps.
/// The final dash is clipped to the segment end.
pub fn dashed_line(
    from: Vec2,
    to: Vec2,
    width: f32,
    on: f32,
    off: f32,
    color: Color,
) -> Vec<Vertex> {
    let length = from.distance(to);
    if on <= 0.0 || length <= 0.0 {
        return line(from, to, width, color);
    }
    let dir = (to - from) / length;
    let period = on + off.max(0.0);

    let mut vertices = Vec::new();
    let mut t = 0.0;
    while t < length {
        let end = (t + on).min(length);
        vertices.extend(line(from + dir * t, from + dir * end, width, color));
        t += period;
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::scene::build_scene;
    use crate::sim::state::{Entity, GameState};
    use crate::tuning::Tuning;

    const WHITE: Color = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), WHITE);
        assert_eq!(v.len(), 6);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 1.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 4.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 2.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 6.0);
    }

    #[test]
    fn test_dashed_line_segments() {
        let v = dashed_line(Vec2::ZERO, Vec2::new(0.0, 640.0), 3.0, 18.0, 14.0, WHITE);
        // 640 / 32 = 20 dashes
        assert_eq!(v.len(), 20 * 6);
        let max_y = v.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert!(max_y <= 640.0);
    }

    #[test]
    fn test_degenerate_line() {
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, WHITE).is_empty());
    }

    #[test]
    fn test_circle_triangle_count() {
        assert_eq!(circle(Vec2::ZERO, 5.0, WHITE, 12).len(), 36);
    }

    #[test]
    fn test_tessellate_scene() {
        let mut state = GameState::new(&Tuning::default());
        state.entities.push(Entity::coin(1, 0, 50).at(10.0));
        let scene = build_scene(&state.snapshot(None));
        let vertices = tessellate(&scene);
        // road 6 + border 24 + 2 dividers * 20 dashes * 6 + coin + player 6
        let expected = 6 + 24 + 2 * 20 * 6 + CIRCLE_SEGMENTS as usize * 3 + 6;
        assert_eq!(vertices.len(), expected);
    }
}
