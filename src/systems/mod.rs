//! Game systems.
//!
//! Submodules overview
//! - [`coin`] – advance the coin spin animation
//! - [`enemy`] – move enemies along their patrol
//! - [`gamestate`] – pending state dispatch, run conditions, confirm and quit keys
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`player`] – player movement, collision resolution and scoring
//! - [`render`] – draw the canvas and scale it into the window using Raylib
//! - [`scroll`] – move the camera to follow the player
//! - [`time`] – update simulation time and the tick counter

pub mod coin;
pub mod enemy;
pub mod gamestate;
pub mod input;
pub mod player;
pub mod render;
pub mod scroll;
pub mod time;
