//! Collectible coin components.

use bevy_ecs::prelude::Component;

pub const COIN_SIZE: f32 = 15.0;
const SPIN_SPEED: f32 = 0.1;
const SPIN_WRAP: f32 = 2.0;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Coin;

/// Cosmetic spin phase in `[0, 2)`. The renderer squashes the coin by it.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct CoinSpin {
    pub phase: f32,
}

impl CoinSpin {
    pub fn advance(&mut self) {
        self.phase += SPIN_SPEED;
        if self.phase >= SPIN_WRAP {
            self.phase = 0.0;
        }
    }

    /// Horizontal scale for drawing: 1 at phase 0, thinnest at phase 1.
    pub fn width_factor(&self) -> f32 {
        (1.0 - self.phase).abs().max(0.15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_wraps() {
        let mut spin = CoinSpin::default();
        for _ in 0..25 {
            spin.advance();
        }
        assert!(spin.phase < SPIN_WRAP);
        assert!(spin.phase >= 0.0);
    }

    #[test]
    fn test_width_factor_bounds() {
        let full = CoinSpin { phase: 0.0 };
        let edge = CoinSpin { phase: 1.0 };
        assert_eq!(full.width_factor(), 1.0);
        assert_eq!(edge.width_factor(), 0.15);
    }
}
