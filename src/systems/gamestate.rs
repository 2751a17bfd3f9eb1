//! Game state systems: pending transition dispatch, run conditions and the
//! key handlers that move between screens.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::player::Player;
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::level::LevelProgress;

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if next_state.pending().is_some() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

pub fn state_awaits_confirm(state: Res<GameState>) -> bool {
    state.get().awaits_confirm()
}

/// Escape requests [`GameStates::Quitting`] from any state.
pub fn quit_controller(input: Res<InputState>, mut next_state: ResMut<NextGameState>) {
    if input.quit.just_pressed {
        info!("Quit requested");
        next_state.set(GameStates::Quitting);
    }
}

/// Handle the confirm key on the level complete, game over and game complete
/// screens.
///
/// The key is edge-triggered unless [`GameConfig::confirm_on_hold`] is set,
/// in which case holding it keeps confirming every tick.
pub fn confirm_controller(
    input: Res<InputState>,
    config: Option<Res<GameConfig>>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    mut progress: ResMut<LevelProgress>,
    mut players: Query<&mut Player>,
) {
    let on_hold = config.is_some_and(|c| c.confirm_on_hold);
    let pressed = if on_hold {
        input.confirm.active
    } else {
        input.confirm.just_pressed
    };
    if !pressed {
        return;
    }

    match *state.get() {
        GameStates::LevelComplete => {
            if progress.advance() {
                info!("Advancing to level {}", progress.index);
                next_state.set(GameStates::Playing);
            } else {
                next_state.set(GameStates::GameComplete);
            }
        }
        GameStates::GameOver => {
            for mut player in players.iter_mut() {
                player.reset();
            }
            info!("Retrying level {}", progress.index);
            next_state.set(GameStates::Playing);
        }
        GameStates::GameComplete => {
            for mut player in players.iter_mut() {
                player.reset();
            }
            progress.restart();
            info!("Starting over from level {}", progress.index);
            next_state.set(GameStates::Playing);
        }
        _ => {}
    }
}
