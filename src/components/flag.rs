//! Goal flag marker. Touching it completes the level.

use bevy_ecs::prelude::Component;

pub const FLAG_WIDTH: f32 = 10.0;
pub const FLAG_HEIGHT: f32 = 50.0;
/// Height of the red cloth at the top of the pole.
pub const FLAG_CLOTH_HEIGHT: f32 = 30.0;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Flag;
