//! Debug overlay toggle resource.
//!
//! The mere presence of [`DebugMode`] enables collider outlines and the
//! diagnostic text line. Toggled with F11 or enabled at launch with `--debug`.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws debug overlays.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
