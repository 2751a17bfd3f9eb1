//! High-level game state resources.
//!
//! These resources track the authoritative current state of the game and any
//! pending transition requested by systems. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied and hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    Setup,
    Playing,
    /// Flag reached; waiting for confirm to load the next level.
    LevelComplete,
    /// Out of lives; waiting for confirm to retry.
    GameOver,
    /// Last level finished; waiting for confirm to start over.
    GameComplete,
    Quitting,
}

impl GameStates {
    /// States that sit on a message screen until the confirm key is pressed.
    pub fn awaits_confirm(&self) -> bool {
        matches!(
            self,
            GameStates::LevelComplete | GameStates::GameOver | GameStates::GameComplete
        )
    }
}

/// Representation of a requested next state.
///
/// Use [`NextGameState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextGameStates::Unchanged`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::None`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] and the event
    /// observer when setup/teardown hooks must be triggered.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition to `next` by marking it as pending.
    ///
    /// The system `check_pending_state` will handle the state change event emission.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }

    /// The pending target, if any.
    pub fn pending(&self) -> Option<GameStates> {
        match self.next {
            NextGameStates::Pending(state) => Some(state),
            NextGameStates::Unchanged => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_none() {
        assert_eq!(*GameState::new().get(), GameStates::None);
        assert_eq!(*NextGameState::new().get(), NextGameStates::Unchanged);
    }

    #[test]
    fn test_next_state_set_and_reset() {
        let mut next = NextGameState::new();
        next.set(GameStates::Playing);
        assert_eq!(next.pending(), Some(GameStates::Playing));
        next.reset();
        assert_eq!(next.pending(), None);
    }

    #[test]
    fn test_awaits_confirm() {
        assert!(GameStates::LevelComplete.awaits_confirm());
        assert!(GameStates::GameOver.awaits_confirm());
        assert!(GameStates::GameComplete.awaits_confirm());
        assert!(!GameStates::Playing.awaits_confirm());
        assert!(!GameStates::Setup.awaits_confirm());
    }
}
