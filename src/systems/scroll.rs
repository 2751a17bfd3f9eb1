//! Camera follow.
//!
//! The camera only moves horizontally, and only while the player walks toward
//! a canvas edge that is closer than [`SCROLL_THRESHOLD`].

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::level::LevelBounds;
use crate::resources::screensize::ScreenSize;
use crate::resources::scroll::{SCROLL_THRESHOLD, Scroll};

/// Amount the camera should move this tick for a player whose screen-space
/// box spans `[left, right]`, on a canvas `viewport_width` wide.
pub fn scroll_delta(left: f32, right: f32, direction: i8, speed: f32, viewport_width: f32) -> f32 {
    let pushing_right = direction > 0 && right > viewport_width - SCROLL_THRESHOLD;
    let pushing_left = direction < 0 && left < SCROLL_THRESHOLD;
    if pushing_right || pushing_left {
        f32::from(direction) * speed
    } else {
        0.0
    }
}

/// Shift [`Scroll`] to follow the player, clamped to the level bounds.
pub fn scroll_update(
    mut scroll: ResMut<Scroll>,
    bounds: Res<LevelBounds>,
    screen: Res<ScreenSize>,
    query: Query<(&Player, &MapPosition, &BoxCollider)>,
) {
    let Ok((player, position, collider)) = query.single() else {
        return;
    };
    let (min, max) = collider.aabb(position.pos);
    let viewport_width = screen.w as f32;
    let delta = scroll_delta(
        scroll.to_screen(min.x),
        scroll.to_screen(max.x),
        player.direction,
        player.speed,
        viewport_width,
    );
    if delta != 0.0 {
        scroll.shift_clamped(delta, bounds.width, viewport_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_scroll_in_the_middle() {
        assert_eq!(scroll_delta(250.0, 280.0, 1, 4.0, 600.0), 0.0);
        assert_eq!(scroll_delta(250.0, 280.0, -1, 4.0, 600.0), 0.0);
    }

    #[test]
    fn test_scroll_when_walking_into_either_edge() {
        assert_eq!(scroll_delta(380.0, 410.0, 1, 4.0, 600.0), 4.0);
        assert_eq!(scroll_delta(150.0, 180.0, -1, 4.0, 600.0), -4.0);
    }

    #[test]
    fn test_idle_or_walking_away_does_not_scroll() {
        assert_eq!(scroll_delta(380.0, 410.0, 0, 4.0, 600.0), 0.0);
        assert_eq!(scroll_delta(380.0, 410.0, -1, 4.0, 600.0), 0.0);
        assert_eq!(scroll_delta(150.0, 180.0, 1, 4.0, 600.0), 0.0);
    }
}
