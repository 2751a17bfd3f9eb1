//! Simulation clock resource.
//!
//! Physics advances a fixed amount per tick, so [`WorldTime`] is only used for
//! bookkeeping: the debug overlay shows the tick count and elapsed seconds.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub frame_count: u64,
}
