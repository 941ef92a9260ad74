//! Display/input surface seams
//!
//! The game never talks to SDL directly. Each frame the main loop hands it
//! something that implements [`InputSurface`] (for `update`) and something
//! that implements [`DrawSurface`] (for `draw`). The SDL-backed versions live
//! in `render.rs`; tests use small in-memory fakes.

use chrono::Timelike;
use sdl2::pixels::Color;

/// Unscaled pixel size of the sprite image, read once after decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

/// Where a sprite lands on screen, in logical pixels (top-left + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer state as seen at the start of a frame
pub trait InputSurface {
    /// Whether the primary (left) pointer button is currently held down
    fn is_primary_pressed(&self) -> bool;
}

/// Drawing operations the game needs from the display
///
/// Errors are SDL-style `String`s and are passed straight up to the frame loop.
pub trait DrawSurface {
    fn fill(&mut self, color: Color) -> Result<(), String>;

    /// Draw the sprite image stretched into `placement`
    fn draw_sprite(&mut self, placement: Placement) -> Result<(), String>;

    /// Draw a line of text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color) -> Result<(), String>;
}

/// Source of the current wall-clock second (0-59)
pub trait Clock {
    fn current_second(&self) -> u32;
}

/// Local wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_second(&self) -> u32 {
        chrono::Local::now().second()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_in_range() {
        let second = SystemClock.current_second();
        assert!(second < 61, "second out of range: {}", second);
    }
}
