use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fragment burst parameters for the shatter transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fragments", inline)]
#[serde(default)]
pub struct FragmentOptions {
    /// Pool size.
    #[schemars(title = "Count", range(min = 1, max = 3000))]
    pub count: usize,
    /// Shared spawn point.
    #[schemars(skip)]
    pub origin: [f32; 3],
    /// Slowest per-frame speed.
    #[schemars(title = "Min Speed", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub min_speed: f32,
    /// Width of the speed range above `min_speed`.
    #[schemars(title = "Speed Range", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub speed_range: f32,
    /// Upper bound of the per-frame spin around x and y.
    #[schemars(skip)]
    pub max_spin: f32,
    /// Distance from the world origin at which fragments reach zero scale.
    #[schemars(title = "Fade Radius", range(min = 1.0, max = 60.0), extend("step" = 1.0))]
    pub fade_radius: f32,
}

impl Default for FragmentOptions {
    fn default() -> Self {
        Self {
            count: 300,
            origin: [0.0, 0.0, -5.0],
            min_speed: 0.2,
            speed_range: 0.5,
            max_spin: 0.2,
            fade_radius: 20.0,
        }
    }
}
