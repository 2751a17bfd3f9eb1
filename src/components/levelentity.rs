//! Level-owned entity marker.
//!
//! Everything spawned from a [`LevelLayout`](crate::resources::level::LevelLayout)
//! carries [`LevelEntity`]. Rebuilding a level despawns all of them at once;
//! the player entity does not carry it and survives level changes.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct LevelEntity;
