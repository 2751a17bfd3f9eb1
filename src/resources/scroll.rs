//! Horizontal camera scroll resource.
//!
//! The world is wider than the canvas. [`Scroll`] is the world x that maps to
//! the left edge of the canvas; renderers subtract it from world coordinates.

use bevy_ecs::prelude::Resource;

/// Distance from either canvas edge at which the camera starts following.
pub const SCROLL_THRESHOLD: f32 = 200.0;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct Scroll {
    pub offset: f32,
}

impl Scroll {
    /// World x to screen x.
    pub fn to_screen(&self, world_x: f32) -> f32 {
        world_x - self.offset
    }

    /// Move by `delta`, keeping the view inside `[0, level_width - viewport_width]`.
    pub fn shift_clamped(&mut self, delta: f32, level_width: f32, viewport_width: f32) {
        let max_offset = (level_width - viewport_width).max(0.0);
        self.offset = (self.offset + delta).clamp(0.0, max_offset);
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_subtracts_offset() {
        let scroll = Scroll { offset: 120.0 };
        assert_eq!(scroll.to_screen(500.0), 380.0);
    }

    #[test]
    fn test_shift_never_goes_negative() {
        let mut scroll = Scroll::default();
        scroll.shift_clamped(-4.0, 1210.0, 600.0);
        assert_eq!(scroll.offset, 0.0);
    }

    #[test]
    fn test_shift_stops_at_level_end() {
        let mut scroll = Scroll { offset: 608.0 };
        scroll.shift_clamped(4.0, 1210.0, 600.0);
        assert_eq!(scroll.offset, 610.0);
        scroll.shift_clamped(4.0, 1210.0, 600.0);
        assert_eq!(scroll.offset, 610.0);
    }

    #[test]
    fn test_level_narrower_than_viewport_never_scrolls() {
        let mut scroll = Scroll::default();
        scroll.shift_clamped(4.0, 300.0, 600.0);
        assert_eq!(scroll.offset, 0.0);
    }
}
