use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and parallax parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Resting eye position; the parallax offset is added to its x and y.
    #[schemars(skip)]
    pub base_position: [f32; 3],
    /// World point the camera re-aims at every frame.
    #[schemars(skip)]
    pub look_at: [f32; 3],
    /// Parallax strength applied to the combined pointer and tilt input.
    #[schemars(title = "Parallax", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub intensity: f32,
    /// Per-frame lerp factor toward the parallax target.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
    /// Tilt, in degrees, that maps to a full-scale contribution.
    #[schemars(skip)]
    pub tilt_range: f32,
    /// Front/back tilt treated as neutral (typical holding angle).
    #[schemars(skip)]
    pub neutral_beta: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            base_position: [0.0, 0.0, 2.0],
            look_at: [0.0, 0.0, -20.0],
            intensity: 0.8,
            smoothing: 0.05,
            tilt_range: 45.0,
            neutral_beta: 45.0,
        }
    }
}
