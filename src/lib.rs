//! Scrollrunner library.
//!
//! Exposes the game's ECS components, resources, systems and events for the
//! executable and for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
