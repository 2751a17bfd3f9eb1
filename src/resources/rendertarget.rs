//! Render target resource for the fixed-size canvas.
//!
//! The game always draws into a texture at canvas resolution, which is then
//! scaled to fit the actual window with letterboxing/pillarboxing. This keeps
//! the 600×400 play field identical regardless of window size.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Render target for fixed-resolution rendering with scaling.
///
/// # Note
/// This is a NonSend resource because `RenderTexture2D` contains GPU resources
/// that must be accessed from the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Canvas width in pixels.
    pub game_width: u32,
    /// Canvas height in pixels.
    pub game_height: u32,
}

impl RenderTarget {
    /// Create a new render target at the canvas resolution with
    /// nearest-neighbor filtering.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            game_width: width,
            game_height: height,
        })
    }

    /// Source rectangle for drawing this texture.
    ///
    /// Negative height flips the Y axis, compensating for OpenGL's inverted
    /// texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }

    /// Destination rectangle inside the window, see [`letterbox`].
    pub fn dest_rect(&self, window_w: i32, window_h: i32) -> Rectangle {
        letterbox(self.game_width, self.game_height, window_w, window_h)
    }
}

/// Largest rectangle with the canvas aspect ratio that fits in the window,
/// centered.
pub fn letterbox(game_w: u32, game_h: u32, window_w: i32, window_h: i32) -> Rectangle {
    let gw = game_w.max(1) as f32;
    let gh = game_h.max(1) as f32;
    let scale = (window_w.max(0) as f32 / gw).min(window_h.max(0) as f32 / gh);
    let width = gw * scale;
    let height = gh * scale;
    Rectangle {
        x: (window_w as f32 - width) * 0.5,
        y: (window_h as f32 - height) * 0.5,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterbox_exact_multiple() {
        let r = letterbox(600, 400, 1200, 800);
        assert_eq!((r.x, r.y, r.width, r.height), (0.0, 0.0, 1200.0, 800.0));
    }

    #[test]
    fn test_letterbox_wide_window_pillarboxes() {
        let r = letterbox(600, 400, 1000, 400);
        assert_eq!((r.x, r.y, r.width, r.height), (200.0, 0.0, 600.0, 400.0));
    }

    #[test]
    fn test_letterbox_tall_window_letterboxes() {
        let r = letterbox(600, 400, 600, 800);
        assert_eq!((r.x, r.y, r.width, r.height), (0.0, 200.0, 600.0, 400.0));
    }
}
