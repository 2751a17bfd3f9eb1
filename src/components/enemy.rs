//! Walking enemy components.

use bevy_ecs::prelude::Component;

pub const ENEMY_SIZE: f32 = 30.0;
/// Ticks walked in one direction before turning around.
pub const PATROL_PERIOD: u32 = 50;
pub const PATROL_STEP: f32 = 1.0;

/// Marker for stompable walkers.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Enemy;

/// Back-and-forth walk. Blind to walls and ledges.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Patrol {
    /// +1.0 or -1.0.
    pub direction: f32,
    pub counter: u32,
    pub step: f32,
    pub period: u32,
}

impl Default for Patrol {
    fn default() -> Self {
        Self::new()
    }
}

impl Patrol {
    /// Starts walking right.
    pub fn new() -> Self {
        Self {
            direction: 1.0,
            counter: 0,
            step: PATROL_STEP,
            period: PATROL_PERIOD,
        }
    }

    /// Advance one tick; returns the horizontal displacement for this tick.
    pub fn advance(&mut self) -> f32 {
        let dx = self.direction * self.step;
        self.counter += 1;
        if self.counter >= self.period {
            self.direction = -self.direction;
            self.counter = 0;
        }
        dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patrol_turns_after_period() {
        let mut patrol = Patrol::new();
        let walked: f32 = (0..PATROL_PERIOD).map(|_| patrol.advance()).sum();
        assert_eq!(walked, PATROL_PERIOD as f32);
        assert_eq!(patrol.direction, -1.0);
        assert_eq!(patrol.counter, 0);
        assert_eq!(patrol.advance(), -1.0);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut patrol = Patrol::new();
        let walked: f32 = (0..PATROL_PERIOD * 2).map(|_| patrol.advance()).sum();
        assert_eq!(walked, 0.0);
        assert_eq!(patrol.direction, 1.0);
    }
}
