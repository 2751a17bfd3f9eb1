//! Per-frame keyboard input resource.
//!
//! Captures the handful of keys the game reads and exposes them to systems via
//! the [`InputState`] resource. Arrow keys walk, Space jumps and confirms,
//! Escape quits and F11 toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(KeyboardKey::KEY_NULL)
    }
}

impl BoolState {
    /// An idle key state bound to `key`.
    pub fn bound(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }

    /// Overwrite all three flags at once.
    pub fn set(&mut self, active: bool, just_pressed: bool, just_released: bool) {
        self.active = active;
        self.just_pressed = just_pressed;
        self.just_released = just_released;
    }

    /// Simulate holding the key down, deriving the edge flags from the
    /// previous state. Used by tests and replays.
    pub fn hold(&mut self, down: bool) {
        let was = self.active;
        self.set(down, down && !was, !down && was);
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub jump: BoolState,
    /// Advances past the level-complete, game-over and game-complete screens.
    pub confirm: BoolState,
    pub quit: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            move_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound(KeyboardKey::KEY_SPACE),
            confirm: BoolState::bound(KeyboardKey::KEY_SPACE),
            quit: BoolState::bound(KeyboardKey::KEY_ESCAPE),
            mode_debug: BoolState::bound(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Mutable access to every binding, for bulk polling.
    pub fn all_mut(&mut self) -> [&mut BoolState; 6] {
        [
            &mut self.move_left,
            &mut self.move_right,
            &mut self.jump,
            &mut self.confirm,
            &mut self.quit,
            &mut self.mode_debug,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let mut input = InputState::default();
        for state in input.all_mut() {
            assert!(!state.active);
            assert!(!state.just_pressed);
            assert!(!state.just_released);
        }
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.move_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.move_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.jump.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.confirm.key_binding, KeyboardKey::KEY_SPACE);
        assert_eq!(input.quit.key_binding, KeyboardKey::KEY_ESCAPE);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
    }

    #[test]
    fn test_hold_derives_edges() {
        let mut key = BoolState::default();
        key.hold(true);
        assert!(key.active && key.just_pressed && !key.just_released);
        key.hold(true);
        assert!(key.active && !key.just_pressed && !key.just_released);
        key.hold(false);
        assert!(!key.active && !key.just_pressed && key.just_released);
        key.hold(false);
        assert!(!key.active && !key.just_pressed && !key.just_released);
    }
}
