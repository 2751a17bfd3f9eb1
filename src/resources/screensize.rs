//! Canvas size resource.
//!
//! The game draws to a fixed-size canvas (600×400 unless configured
//! otherwise) which is then scaled into the window. Scrolling thresholds and
//! HUD placement are expressed against this size, never the window size.

use bevy_ecs::prelude::Resource;

pub const DEFAULT_CANVAS_WIDTH: i32 = 600;
pub const DEFAULT_CANVAS_HEIGHT: i32 = 400;

/// Logical canvas size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            w: DEFAULT_CANVAS_WIDTH,
            h: DEFAULT_CANVAS_HEIGHT,
        }
    }
}
