//! Static solid markers.
//!
//! Platforms and pipes block the player on both axes. They are never moved or
//! mutated after spawning; they differ only in how they are drawn and in the
//! order the player update checks them (platforms first, then pipes).

use bevy_ecs::prelude::Component;

/// Ground tiles and floating ledges.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Platform;

/// Green pipes sticking out of the ground.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Pipe;
