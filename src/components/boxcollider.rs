//! Axis-aligned box collider.
//!
//! A [`BoxCollider`] describes the rectangle an entity occupies relative to
//! its [`MapPosition`](super::mapposition::MapPosition). Overlap tests are
//! strict: boxes that only share an edge do not collide, which is what lets
//! a player stand exactly on top of a platform.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        (position, position + self.size)
    }

    /// (x, y, width, height) of the AABB, handy for drawing.
    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Top and bottom edges of the box.
    pub fn vertical_span(&self, position: Vector2) -> (f32, f32) {
        let (min, max) = self.aabb(position);
        (min.y, max.y)
    }

    /// Centre of the box in world space.
    pub fn center(&self, position: Vector2) -> Vector2 {
        let (min, max) = self.aabb(position);
        Vector2::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_detected() {
        let a = BoxCollider::new(30.0, 40.0);
        let b = BoxCollider::new(40.0, 40.0);
        assert!(a.overlaps(Vector2::new(100.0, 330.0), &b, Vector2::new(120.0, 360.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let player = BoxCollider::new(30.0, 40.0);
        let ground = BoxCollider::new(40.0, 40.0);
        // Player bottom (360) sits exactly on ground top (360).
        assert!(!player.overlaps(Vector2::new(100.0, 320.0), &ground, Vector2::new(80.0, 360.0)));
        // Side by side.
        assert!(!player.overlaps(Vector2::new(50.0, 360.0), &ground, Vector2::new(80.0, 360.0)));
    }

    #[test]
    fn test_aabb_starts_at_position() {
        let c = BoxCollider::new(10.0, 20.0);
        assert_eq!(c.get_aabb(Vector2::new(6.0, 6.0)), (6.0, 6.0, 10.0, 20.0));
    }

    #[test]
    fn test_center_and_vertical_span() {
        let c = BoxCollider::new(30.0, 30.0);
        let pos = Vector2::new(300.0, 330.0);
        assert_eq!(c.center(pos), Vector2::new(315.0, 345.0));
        assert_eq!(c.vertical_span(pos), (330.0, 360.0));
    }
}
