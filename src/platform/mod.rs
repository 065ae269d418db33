//! Platform abstraction layer
//!
//! Translates host events (keyboard, touch, buttons) into engine commands.
//! Frame timing lives in `crate::driver`.

pub mod input;

pub use input::{Command, Steer, SwipeTracker, map_key};
