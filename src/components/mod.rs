//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`coin`] – collectible marker and its spin phase
//! - [`enemy`] – enemy marker and back-and-forth patrol state
//! - [`flag`] – level goal marker
//! - [`levelentity`] – marker for entities torn down on every level rebuild
//! - [`mapposition`] – world-space position (top-left corner)
//! - [`platform`] – static solid markers (platforms and pipes)
//! - [`player`] – the player's movement state, score and lives
//! - [`rigidbody`] – vertical velocity under gravity
//! - [`tint`] – fill color

pub mod boxcollider;
pub mod coin;
pub mod enemy;
pub mod flag;
pub mod levelentity;
pub mod mapposition;
pub mod platform;
pub mod player;
pub mod rigidbody;
pub mod tint;
