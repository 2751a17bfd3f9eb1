//! World-space position component.
//!
//! [`MapPosition`] stores the top-left corner of an entity in world units.
//! The horizontal scroll offset is subtracted only at draw time, so every
//! simulation system works in world coordinates.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position of an entity (top-left corner of its box).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl Default for MapPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl MapPosition {
    /// Create a MapPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// X coordinate.
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Position shifted by `(dx, dy)` without mutating the component.
    pub fn offset_by(&self, dx: f32, dy: f32) -> Vector2 {
        Vector2 {
            x: self.pos.x + dx,
            y: self.pos.y + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_coordinates() {
        let p = MapPosition::new(12.5, -3.0);
        assert_eq!(p.x(), 12.5);
        assert_eq!(p.y(), -3.0);
    }

    #[test]
    fn test_offset_by_leaves_original_untouched() {
        let p = MapPosition::new(10.0, 20.0);
        let moved = p.offset_by(4.0, -2.0);
        assert_eq!(moved.x, 14.0);
        assert_eq!(moved.y, 18.0);
        assert_eq!(p.x(), 10.0);
        assert_eq!(p.y(), 20.0);
    }
}
