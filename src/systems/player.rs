//! Player update: input, gravity, collision resolution and scoring.
//!
//! [`step_player`] is the whole per-tick rule set as a plain function over
//! snapshots of the level, so it can be exercised without a `World`.
//! [`player_update`] is the ECS system that gathers those snapshots, calls
//! it, and applies the report: despawning stomped enemies and collected coins
//! and requesting a state change.
//!
//! Collision checks always test the *prospective* box (current position plus
//! the pending delta on one axis) rather than a moved box, so horizontal and
//! vertical resolution stay independent.

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;
use smallvec::SmallVec;

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::flag::Flag;
use crate::components::mapposition::MapPosition;
use crate::components::platform::{Pipe, Platform};
use crate::components::player::{Player, SPAWN_POINT};
use crate::components::rigidbody::RigidBody;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::input::InputState;

pub const JUMP_IMPULSE: f32 = -12.0;
pub const STOMP_BOUNCE: f32 = -6.0;
pub const STOMP_REWARD: u32 = 100;
pub const COIN_REWARD: u32 = 50;

/// Held state of the three gameplay keys for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerControls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl PlayerControls {
    pub fn from_input(input: &InputState) -> Self {
        Self {
            left: input.move_left.active,
            right: input.move_right.active,
            jump: input.jump.active,
        }
    }
}

/// A static or moving box the player can touch.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub entity: Entity,
    pub position: Vector2,
    pub collider: BoxCollider,
}

impl Body {
    pub fn new(entity: Entity, position: Vector2, collider: BoxCollider) -> Self {
        Self {
            entity,
            position,
            collider,
        }
    }
}

/// Snapshot of everything the player can collide with this tick.
///
/// `solids` must list platforms before pipes, each in spawn order; later
/// solids see deltas already adjusted by earlier ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct Surroundings<'a> {
    pub solids: &'a [Body],
    pub enemies: &'a [Body],
    pub coins: &'a [Body],
    pub flags: &'a [Body],
}

/// What the outer loop should do after this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickOutcome {
    #[default]
    Playing,
    LevelComplete,
    GameOver,
}

/// Result of one [`step_player`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub outcome: TickOutcome,
    /// Enemies to remove. Each appears at most once.
    pub stomped: SmallVec<[Entity; 4]>,
    /// Coins to remove. Each appears at most once.
    pub collected: SmallVec<[Entity; 4]>,
    /// The player took a hit and was sent back to the spawn point.
    pub damaged: bool,
}

/// Advance the player by one tick.
///
/// Mutates the player, its body and its position, and reports which enemies
/// and coins were consumed. The enemy and coin sets themselves are never
/// touched here.
pub fn step_player(
    player: &mut Player,
    body: &mut RigidBody,
    position: &mut MapPosition,
    collider: &BoxCollider,
    controls: PlayerControls,
    around: &Surroundings,
) -> TickReport {
    let mut report = TickReport::default();

    let mut dx = 0.0;
    player.direction = 0;
    if controls.left {
        dx = -player.speed;
        player.flip = true;
        player.direction = -1;
    }
    if controls.right {
        dx = player.speed;
        player.flip = false;
        player.direction = 1;
    }

    if controls.jump && !player.jumped && !player.in_air {
        body.velocity.y = JUMP_IMPULSE;
        player.jumped = true;
        player.in_air = true;
    }
    if !controls.jump {
        player.jumped = false;
    }

    body.apply_gravity();
    let mut dy = body.velocity.y;

    // Solids: platforms, then pipes.
    player.in_air = true;
    for solid in around.solids {
        if collider.overlaps(position.offset_by(dx, 0.0), &solid.collider, solid.position) {
            dx = 0.0;
        }
        if collider.overlaps(position.offset_by(0.0, dy), &solid.collider, solid.position) {
            let (top, bottom) = collider.vertical_span(position.pos);
            let (solid_top, solid_bottom) = solid.collider.vertical_span(solid.position);
            if body.velocity.y < 0.0 {
                // Head bump.
                dy = solid_bottom - top;
            } else {
                dy = solid_top - bottom;
                player.in_air = false;
            }
            body.velocity.y = 0.0;
        }
    }

    // Enemies: stomp from above, anything else hurts.
    let (_, bottom) = collider.vertical_span(position.pos);
    for enemy in around.enemies {
        if !collider.overlaps(position.offset_by(dx, 0.0), &enemy.collider, enemy.position) {
            continue;
        }
        let enemy_center = enemy.collider.center(enemy.position).y;
        if body.velocity.y > 0.0 && bottom < enemy_center {
            if !report.stomped.contains(&enemy.entity) {
                report.stomped.push(enemy.entity);
                player.add_score(STOMP_REWARD);
            }
            body.velocity.y = STOMP_BOUNCE;
        } else {
            let out_of_lives = player.lose_life();
            position.pos = SPAWN_POINT;
            body.velocity.y = 0.0;
            player.in_air = true;
            report.damaged = true;
            report.outcome = if out_of_lives {
                TickOutcome::GameOver
            } else {
                TickOutcome::Playing
            };
            return report;
        }
    }

    // Coins and the flag are checked against the box before this tick's move.
    for coin in around.coins {
        if collider.overlaps(position.pos, &coin.collider, coin.position)
            && !report.collected.contains(&coin.entity)
        {
            report.collected.push(coin.entity);
            player.add_score(COIN_REWARD);
        }
    }

    let touches_flag = around
        .flags
        .iter()
        .any(|flag| collider.overlaps(position.pos, &flag.collider, flag.position));
    if touches_flag {
        report.outcome = TickOutcome::LevelComplete;
        return report;
    }

    position.pos.x += dx;
    position.pos.y += dy;

    let (min, _) = collider.aabb(position.pos);
    if min.x < 0.0 {
        position.pos.x -= min.x;
    }

    report
}

fn snapshot<'a>(items: impl Iterator<Item = (Entity, &'a MapPosition, &'a BoxCollider)>) -> Vec<Body> {
    items
        .map(|(entity, position, collider)| Body::new(entity, position.pos, *collider))
        .collect()
}

/// ECS system running [`step_player`] for the player entity.
///
/// Stomped enemies and collected coins are despawned through `Commands`, so
/// removal takes effect after the traversal, at the end of the tick.
#[allow(clippy::too_many_arguments)]
pub fn player_update(
    mut commands: Commands,
    input: Res<InputState>,
    mut next_state: ResMut<NextGameState>,
    mut players: Query<(&mut Player, &mut RigidBody, &mut MapPosition, &BoxCollider)>,
    platforms: Query<(Entity, &MapPosition, &BoxCollider), (With<Platform>, Without<Player>)>,
    pipes: Query<(Entity, &MapPosition, &BoxCollider), (With<Pipe>, Without<Player>)>,
    enemies: Query<(Entity, &MapPosition, &BoxCollider), (With<Enemy>, Without<Player>)>,
    coins: Query<(Entity, &MapPosition, &BoxCollider), (With<Coin>, Without<Player>)>,
    flags: Query<(Entity, &MapPosition, &BoxCollider), (With<Flag>, Without<Player>)>,
) {
    let Ok((mut player, mut body, mut position, collider)) = players.single_mut() else {
        return;
    };

    let solids = snapshot(platforms.iter().chain(pipes.iter()));
    let enemies = snapshot(enemies.iter());
    let coins = snapshot(coins.iter());
    let flags = snapshot(flags.iter());
    let around = Surroundings {
        solids: &solids,
        enemies: &enemies,
        coins: &coins,
        flags: &flags,
    };

    let report = step_player(
        &mut player,
        &mut body,
        &mut position,
        collider,
        PlayerControls::from_input(&input),
        &around,
    );

    for entity in &report.stomped {
        debug!("Stomped enemy {:?}", entity);
        commands.entity(*entity).despawn();
    }
    for entity in &report.collected {
        debug!("Collected coin {:?}", entity);
        commands.entity(*entity).despawn();
    }
    if report.damaged {
        info!("Player hit, {} lives left", player.lives);
    }

    match report.outcome {
        TickOutcome::Playing => {}
        TickOutcome::LevelComplete => {
            info!("Level complete with score {}", player.score);
            next_state.set(GameStates::LevelComplete);
        }
        TickOutcome::GameOver => {
            info!("Game over with score {}", player.score);
            next_state.set(GameStates::GameOver);
        }
    }
}
