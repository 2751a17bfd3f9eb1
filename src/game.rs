//! Game setup and level (re)building.
//!
//! The state hooks registered in [`SystemsStore`] live here:
//! - [`setup`] spawns the player once and requests [`GameStates::Playing`]
//! - [`enter_play`] tears down the previous level and spawns the current one
//! - [`quit_game`] logs the shutdown
//!
//! [`install`] wires hooks and observers into a world and
//! [`add_simulation_systems`] adds the per-tick simulation to a schedule; the
//! executable and the integration tests share both.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::prelude::Color;

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::{COIN_SIZE, Coin, CoinSpin};
use crate::components::enemy::{ENEMY_SIZE, Enemy, Patrol};
use crate::components::flag::Flag;
use crate::components::levelentity::LevelEntity;
use crate::components::mapposition::MapPosition;
use crate::components::platform::{Pipe, Platform};
use crate::components::player::{PLAYER_HEIGHT, PLAYER_WIDTH, Player, SPAWN_POINT};
use crate::components::rigidbody::RigidBody;
use crate::components::tint::{BROWN, GREEN, RED, Tint, WHITE, YELLOW};
use crate::events::gamestate::{
    ENTER_PLAY_HOOK, QUIT_GAME_HOOK, SETUP_HOOK, observe_gamestate_change_event,
};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::level::{LevelBounds, LevelLayout, LevelProgress, LevelSource, RectSpec};
use crate::resources::scroll::Scroll;
use crate::resources::systemsstore::SystemsStore;
use crate::systems::coin::coin_spin;
use crate::systems::enemy::enemy_patrol;
use crate::systems::gamestate::{
    check_pending_state, confirm_controller, quit_controller, state_awaits_confirm,
    state_is_playing,
};
use crate::systems::player::player_update;
use crate::systems::scroll::scroll_update;

/// Register the state hooks and observers on `world` and insert the
/// resulting [`SystemsStore`].
pub fn install(world: &mut World) {
    let mut systems_store = SystemsStore::new();
    systems_store.register(world, SETUP_HOOK, setup);
    systems_store.register(world, ENTER_PLAY_HOOK, enter_play);
    systems_store.register(world, QUIT_GAME_HOOK, quit_game);
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();
}

/// Add the simulation stages, in tick order, to `schedule`.
///
/// Hardware input polling and rendering are not included; they need a live
/// raylib window and are added by the executable around these.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            quit_controller,
            (enemy_patrol, coin_spin, player_update, scroll_update)
                .chain()
                .run_if(state_is_playing),
            confirm_controller.run_if(state_awaits_confirm),
            check_pending_state,
        )
            .chain(),
    );
}

fn player_bundle() -> (Player, RigidBody, MapPosition, BoxCollider, Tint) {
    (
        Player::new(),
        RigidBody::new(),
        MapPosition { pos: SPAWN_POINT },
        BoxCollider::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        Tint::from_color(RED),
    )
}

fn solid(rect: &RectSpec, color: Color) -> (LevelEntity, MapPosition, BoxCollider, Tint) {
    (
        LevelEntity,
        MapPosition::new(rect.x, rect.y),
        BoxCollider::new(rect.w, rect.h),
        Tint::from_color(color),
    )
}

/// Spawn every piece of `layout` as level entities.
///
/// Platforms (ground first, then ledges) and pipes are spawned in layout
/// order; the player update resolves them in that order.
pub fn spawn_layout(commands: &mut Commands, layout: &LevelLayout) {
    for rect in layout.ground.iter().chain(&layout.ledges) {
        commands.spawn((Platform, solid(rect, BROWN)));
    }
    for rect in &layout.pipes {
        commands.spawn((Pipe, solid(rect, GREEN)));
    }
    for spot in &layout.enemies {
        commands.spawn((
            Enemy,
            Patrol::new(),
            LevelEntity,
            MapPosition::new(spot.x, spot.y),
            BoxCollider::new(ENEMY_SIZE, ENEMY_SIZE),
            Tint::from_color(BROWN),
        ));
    }
    for spot in &layout.coins {
        commands.spawn((
            Coin,
            CoinSpin::default(),
            LevelEntity,
            MapPosition::new(spot.x, spot.y),
            BoxCollider::new(COIN_SIZE, COIN_SIZE),
            Tint::from_color(YELLOW),
        ));
    }
    commands.spawn((Flag, solid(&layout.flag_rect(), WHITE)));
}

pub fn setup(mut commands: Commands, mut next_state: ResMut<NextGameState>) {
    commands.spawn(player_bundle());
    info!("Player spawned at ({}, {})", SPAWN_POINT.x, SPAWN_POINT.y);
    next_state.set(GameStates::Playing);
}

/// Rebuild the current level from scratch and put the player at the spawn
/// point. A level that cannot be built stops the game.
#[allow(clippy::too_many_arguments)]
pub fn enter_play(
    mut commands: Commands,
    source: Res<LevelSource>,
    progress: Res<LevelProgress>,
    mut bounds: ResMut<LevelBounds>,
    mut scroll: ResMut<Scroll>,
    mut next_state: ResMut<NextGameState>,
    level_entities: Query<Entity, With<LevelEntity>>,
    mut players: Query<(&mut Player, &mut RigidBody, &mut MapPosition)>,
) {
    for entity in level_entities.iter() {
        commands.entity(entity).despawn();
    }

    let layout = match source.load(progress.index, progress.max_levels) {
        Ok(layout) => layout,
        Err(e) => {
            error!("Cannot build level {}: {}", progress.index, e);
            next_state.set(GameStates::Quitting);
            return;
        }
    };

    spawn_layout(&mut commands, &layout);
    bounds.width = layout.world_width();
    scroll.reset();

    for (mut player, mut body, mut position) in players.iter_mut() {
        position.pos = SPAWN_POINT;
        body.stop();
        player.in_air = true;
        player.direction = 0;
    }

    info!(
        "Entered level {}/{} ({} platforms, {} enemies, {} coins)",
        progress.index,
        progress.max_levels,
        layout.platform_count(),
        layout.enemies.len(),
        layout.coins.len()
    );
}

pub fn quit_game() {
    info!("Quitting game");
}
