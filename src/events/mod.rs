//! Event types and observers.
//!
//! Submodules:
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod gamestate;
pub mod switchdebug;
