//! Player state component.
//!
//! [`Player`] holds everything about the player that is not a position or a
//! velocity: input-derived flags, score and lives. Position and velocity live
//! in [`MapPosition`](super::mapposition::MapPosition) and
//! [`RigidBody`](super::rigidbody::RigidBody) like on every other body.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
pub const PLAYER_SPEED: f32 = 4.0;
pub const STARTING_LIVES: u32 = 3;
/// Where the player appears on level entry and after taking damage.
pub const SPAWN_POINT: Vector2 = Vector2 { x: 100.0, y: 300.0 };

#[derive(Component, Clone, Debug, PartialEq)]
pub struct Player {
    /// Horizontal intent this tick: -1 left, 0 idle, 1 right.
    pub direction: i8,
    /// True until the player lands on a solid.
    pub in_air: bool,
    /// Jump latch. Set on jump, cleared when the jump key is released.
    pub jumped: bool,
    /// Facing left.
    pub flip: bool,
    pub speed: f32,
    pub score: u32,
    pub lives: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            direction: 0,
            in_air: true,
            jumped: false,
            flip: false,
            speed: PLAYER_SPEED,
            score: 0,
            lives: STARTING_LIVES,
        }
    }

    /// Take one hit. Returns true when no lives are left.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Back to a fresh game: full lives, no score, no latched input.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let p = Player::new();
        assert_eq!(p.lives, 3);
        assert_eq!(p.score, 0);
        assert_eq!(p.direction, 0);
        assert!(p.in_air);
        assert!(!p.jumped);
        assert!(!p.flip);
        assert_eq!(p.speed, PLAYER_SPEED);
    }

    #[test]
    fn test_lose_life_never_underflows() {
        let mut p = Player::new();
        assert!(!p.lose_life());
        assert!(!p.lose_life());
        assert!(p.lose_life());
        assert_eq!(p.lives, 0);
        assert!(p.lose_life());
        assert_eq!(p.lives, 0);
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut p = Player::new();
        p.add_score(350);
        p.lose_life();
        p.flip = true;
        p.reset();
        assert_eq!(p, Player::new());
    }
}
