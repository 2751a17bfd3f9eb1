//! Coin spin animation system.
use bevy_ecs::prelude::*;

use crate::components::coin::CoinSpin;

pub fn coin_spin(mut query: Query<&mut CoinSpin>) {
    for mut spin in query.iter_mut() {
        spin.advance();
    }
}
