//! Rendering contract
//!
//! The simulation never draws. `scene` turns a snapshot into an ordered draw
//! list and HUD text; `shapes` tessellates the geometric part into triangles
//! for a GPU host. Text is left to the host.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{DrawCmd, Hud, Scene, build_scene};
pub use shapes::tessellate;
pub use vertex::{Color, Vertex};
