//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Bytes per vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Raw byte view of a vertex list, ready for a GPU upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Flat `[x, y, r, g, b, a, ...]` view for hosts that want plain floats
pub fn as_floats(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

/// `0xRRGGBB` plus alpha to a color
pub const fn hex(rgb: u32, alpha: f32) -> Color {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        alpha,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::{Color, hex};

    /// Rank palette, cycled by `(rank - 1) % len`
    pub const RANKS: [Color; 6] = [
        hex(0x78a9ff, 1.0),
        hex(0x7ef7c6, 1.0),
        hex(0xffd166, 1.0),
        hex(0xf78c6b, 1.0),
        hex(0xc792ea, 1.0),
        hex(0xf0719b, 1.0),
    ];

    pub const ROAD: Color = hex(0x111a31, 1.0);
    pub const ROAD_BORDER: Color = hex(0xc1d0ff, 0.35);
    pub const LANE_DIVIDER: Color = hex(0xe2edff, 0.3);
    pub const COIN: Color = hex(0xffd166, 1.0);
    pub const COIN_LABEL: Color = hex(0x8a5f00, 1.0);
    pub const BLOCK_LABEL: Color = hex(0x0f162d, 1.0);
    pub const PLAYER_LABEL: Color = hex(0x0d1430, 1.0);
    pub const OVERLAY: Color = hex(0x050812, 0.72);
    pub const TEXT: Color = hex(0xffffff, 1.0);

    /// Palette entry for a rank (rank 0 is treated as rank 1)
    pub fn rank(rank: u32) -> Color {
        RANKS[(rank.max(1) as usize - 1) % RANKS.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(hex(0xff0000, 1.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hex(0x000000, 0.5), [0.0, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_rank_palette_cycles() {
        assert_eq!(colors::rank(1), colors::RANKS[0]);
        assert_eq!(colors::rank(6), colors::RANKS[5]);
        assert_eq!(colors::rank(7), colors::RANKS[0]);
        assert_eq!(colors::rank(0), colors::RANKS[0]);
    }

    #[test]
    fn test_byte_views() {
        let vertices = [Vertex::new(1.0, 2.0, [0.1, 0.2, 0.3, 0.4]); 3];
        assert_eq!(as_bytes(&vertices).len(), 3 * Vertex::STRIDE);
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(&as_floats(&vertices)[..6], &[1.0f32, 2.0, 0.1, 0.2, 0.3, 0.4]);
    }
}
