//! Enemy patrol system.
use bevy_ecs::prelude::*;

use crate::components::enemy::{Enemy, Patrol};
use crate::components::mapposition::MapPosition;

/// Walk every enemy one step along its patrol.
///
/// Enemies ignore platforms, pipes and world edges.
pub fn enemy_patrol(mut query: Query<(&mut MapPosition, &mut Patrol), With<Enemy>>) {
    for (mut position, mut patrol) in query.iter_mut() {
        position.pos.x += patrol.advance();
    }
}
