//! Fill color component.
//!
//! Every level piece is drawn as a solid rectangle; [`Tint`] says which color.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

pub const SKY_BLUE: Color = Color { r: 107, g: 140, b: 255, a: 255 };
pub const BROWN: Color = Color { r: 139, g: 69, b: 19, a: 255 };
pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
pub const YELLOW: Color = Color { r: 255, g: 255, b: 0, a: 255 };
pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

/// Fill color used by the render system.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    /// Wrap an existing color.
    pub fn from_color(color: Color) -> Self {
        Self { color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_color() {
        let t = Tint::from_color(BROWN);
        assert_eq!((t.color.r, t.color.g, t.color.b), (139, 69, 19));
    }
}
