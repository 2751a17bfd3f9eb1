//! Kinematic body with a constant downward pull.
//!
//! The [`RigidBody`] component stores velocity in world units per tick. The
//! simulation runs at a fixed tick rate, so no delta time is involved: gravity
//! is added once per tick and the resulting vertical speed is clamped to a
//! terminal fall speed.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Downward acceleration added every tick.
pub const GRAVITY: f32 = 0.5;
/// Terminal fall speed.
pub const MAX_FALL_SPEED: f32 = 10.0;

/// Kinematic body storing per-tick velocity.
///
/// # Fields
/// - `velocity` - Current velocity in world units per tick
/// - `gravity` - Added to `velocity.y` by [`RigidBody::apply_gravity`]
/// - `max_fall_speed` - Upper clamp for `velocity.y`
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
    pub gravity: f32,
    pub max_fall_speed: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest using the platformer gravity constants.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
        }
    }

    /// Add one tick of gravity and clamp to the terminal fall speed.
    pub fn apply_gravity(&mut self) {
        self.velocity.y = (self.velocity.y + self.gravity).min(self.max_fall_speed);
    }

    /// Zero the velocity.
    pub fn stop(&mut self) {
        self.velocity = Vector2 { x: 0.0, y: 0.0 };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_new_is_at_rest() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity.x, 0.0);
        assert_eq!(rb.velocity.y, 0.0);
        assert_eq!(rb.gravity, GRAVITY);
        assert_eq!(rb.max_fall_speed, MAX_FALL_SPEED);
    }

    #[test]
    fn test_apply_gravity_accumulates() {
        let mut rb = RigidBody::new();
        rb.apply_gravity();
        rb.apply_gravity();
        assert_eq!(rb.velocity.y, 1.0);
    }

    #[test]
    fn test_apply_gravity_clamps_to_terminal_speed() {
        let mut rb = RigidBody::new();
        for _ in 0..100 {
            rb.apply_gravity();
        }
        assert_eq!(rb.velocity.y, MAX_FALL_SPEED);
    }

    #[test]
    fn test_upward_velocity_is_not_clamped() {
        let mut rb = RigidBody::new();
        rb.velocity.y = -12.0;
        rb.apply_gravity();
        assert_eq!(rb.velocity.y, -11.5);
    }

    #[test]
    fn test_stop_zeroes_velocity() {
        let mut rb = RigidBody::new();
        rb.velocity.x = 2.0;
        rb.apply_gravity();
        rb.stop();
        assert_eq!(rb.velocity.x, 0.0);
        assert_eq!(rb.velocity.y, 0.0);
    }
}
