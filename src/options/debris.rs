use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Debris particle field parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Debris", inline)]
#[serde(default)]
pub struct DebrisOptions {
    /// Pool size, fixed for the lifetime of the field.
    #[schemars(title = "Count", range(min = 1, max = 4000))]
    pub count: usize,
    /// Full width of the lateral (x and y) spawn range.
    #[schemars(title = "Spread", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub lateral_extent: f32,
    /// Axial coordinate particles respawn at.
    #[schemars(skip)]
    pub near_z: f32,
    /// Axial coordinate past which a particle is recycled.
    #[schemars(skip)]
    pub far_z: f32,
    /// Axial drift, world units per second.
    #[schemars(title = "Rate", range(min = 0.0, max = 40.0), extend("step" = 0.5))]
    pub rate: f32,
    /// Per-particle speed variation as a fraction of `rate` (0 = uniform).
    #[schemars(title = "Speed Jitter", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub speed_jitter: f32,
    /// Multiplier from a particle's size to its rendered scale.
    #[schemars(skip)]
    pub size_scale: f32,
}

impl Default for DebrisOptions {
    fn default() -> Self {
        Self {
            count: 400,
            lateral_extent: 10.0,
            near_z: 5.0,
            far_z: -45.0,
            rate: 10.0,
            speed_jitter: 0.0,
            size_scale: 0.05,
        }
    }
}
