//! Host input translation
//!
//! Keyboard keys, touch swipes and the restart button all collapse into a
//! small set of engine commands.

use serde::{Deserialize, Serialize};

/// Minimum horizontal swipe distance (pixels) that counts as a lane change
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// One-lane steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steer {
    Left,
    Right,
}

impl Steer {
    /// Lane delta for this direction
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            Steer::Left => -1,
            Steer::Right => 1,
        }
    }
}

/// Commands a host can send to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Steer(Steer),
    Restart,
}

/// Map a DOM-style key name to a command
pub fn map_key(key: &str) -> Option<Command> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Command::Steer(Steer::Left)),
        "ArrowRight" | "d" | "D" => Some(Command::Steer(Steer::Right)),
        _ => None,
    }
}

/// Turns touch start/end pairs into swipe commands
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish a touch; short drags and ends without a start are ignored
    pub fn touch_end(&mut self, x: f32) -> Option<Command> {
        let start = self.start_x.take()?;
        let delta = x - start;
        if delta.abs() < SWIPE_THRESHOLD {
            return None;
        }
        let steer = if delta < 0.0 { Steer::Left } else { Steer::Right };
        Some(Command::Steer(steer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key("ArrowLeft"), Some(Command::Steer(Steer::Left)));
        assert_eq!(map_key("a"), Some(Command::Steer(Steer::Left)));
        assert_eq!(map_key("A"), Some(Command::Steer(Steer::Left)));
        assert_eq!(map_key("ArrowRight"), Some(Command::Steer(Steer::Right)));
        assert_eq!(map_key("D"), Some(Command::Steer(Steer::Right)));
        assert_eq!(map_key("ArrowUp"), None);
        assert_eq!(map_key(" "), None);
    }

    #[test]
    fn test_swipes() {
        let mut swipe = SwipeTracker::new();
        swipe.touch_start(200.0);
        assert_eq!(swipe.touch_end(150.0), Some(Command::Steer(Steer::Left)));

        swipe.touch_start(200.0);
        assert_eq!(swipe.touch_end(230.0), Some(Command::Steer(Steer::Right)));

        swipe.touch_start(200.0);
        assert_eq!(swipe.touch_end(229.0), None);
    }

    #[test]
    fn test_touch_end_without_start() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.touch_end(0.0), None);
        swipe.touch_start(100.0);
        assert!(swipe.touch_end(0.0).is_some());
        // Start is consumed
        assert_eq!(swipe.touch_end(300.0), None);
    }
}
