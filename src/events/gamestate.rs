//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers the
//! observer in this module, which applies the transition to [`GameState`]
//! and invokes the enter hooks stored in
//! [`crate::resources::systemsstore::SystemsStore`].
//!
//! This decouples the intent to change state from the mechanics of running
//! setup/teardown systems and avoids borrowing conflicts.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};

/// Hook run on entering [`GameStates::Setup`].
pub const SETUP_HOOK: &str = "setup";
/// Hook run on entering [`GameStates::Playing`]; (re)builds the current level.
pub const ENTER_PLAY_HOOK: &str = "enter_play";
/// Hook run on entering [`GameStates::Quitting`].
pub const QUIT_GAME_HOOK: &str = "quit_game";

/// Event used to indicate that a pending game state transition should be
/// applied.
///
/// Emitting this event causes [`observe_gamestate_change_event`] to read
/// [`NextGameState`]. If it contains [`Pending`], the observer updates the
/// authoritative [`GameState`], runs the enter hook, and clears the pending
/// value; if it is [`Unchanged`], nothing happens.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], resets
///   [`NextGameState`] to [`Unchanged`] and queues the enter hook of the new
///   state.
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Option<Res<SystemsStore>>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match *next_game_state.get() {
        Pending(new_state) => {
            info!(
                "Transitioning from {:?} to {:?}",
                game_state.get(),
                new_state
            );
            game_state.set(new_state);
            next_game_state.reset();
            on_state_enter(new_state, &mut commands, systems_store.as_deref());
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

/// Name of the hook to run when entering `state`, if it has one.
pub fn enter_hook(state: GameStates) -> Option<&'static str> {
    match state {
        GameStates::Setup => Some(SETUP_HOOK),
        GameStates::Playing => Some(ENTER_PLAY_HOOK),
        GameStates::Quitting => Some(QUIT_GAME_HOOK),
        GameStates::None
        | GameStates::LevelComplete
        | GameStates::GameOver
        | GameStates::GameComplete => None,
    }
}

/// Internal: run the state-specific "enter" system for the given state.
fn on_state_enter(state: GameStates, commands: &mut Commands, systems_store: Option<&SystemsStore>) {
    let Some(hook) = enter_hook(state) else {
        debug!("Entered {:?} state", state);
        return;
    };
    match systems_store.and_then(|store| store.get(hook)) {
        Some(id) => commands.run_system(*id),
        None => error!("Hook '{}' for state {:?} not found in SystemsStore", hook, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_hooks() {
        assert_eq!(enter_hook(GameStates::Setup), Some(SETUP_HOOK));
        assert_eq!(enter_hook(GameStates::Playing), Some(ENTER_PLAY_HOOK));
        assert_eq!(enter_hook(GameStates::Quitting), Some(QUIT_GAME_HOOK));
        assert_eq!(enter_hook(GameStates::GameOver), None);
        assert_eq!(enter_hook(GameStates::LevelComplete), None);
        assert_eq!(enter_hook(GameStates::GameComplete), None);
    }
}
