//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, game state, level data,
//! camera scroll and rendering handles.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – INI-backed settings
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `level` – level layouts, where they come from, and progression
//! - `rendertarget` – fixed-size canvas texture scaled into the window
//! - `screensize` – canvas dimensions in pixels
//! - `scroll` – horizontal camera offset
//! - `systemsstore` – registry of state hook systems by name
//! - `worldtime` – tick counter and elapsed time
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod rendertarget;
pub mod screensize;
pub mod scroll;
pub mod systemsstore;
pub mod worldtime;
