use glam::{Vec2, Vec3};

use super::core::{Camera, CameraUniform, CameraView};
use super::input::{clamp_ndc, tilt_contribution, TiltInput};
use crate::options::CameraOptions;

/// Parallax camera: blends pointer and device tilt into a smoothed eye
/// offset and re-aims at a fixed depth point every frame.
///
/// Smoothing is a fixed per-frame lerp, so the settle time depends on the
/// display's refresh rate.
#[derive(Debug, Clone)]
pub struct CameraRig {
    offset: Vec2,
    base_position: Vec3,
    look_at: Vec3,
    intensity: f32,
    smoothing: f32,
    tilt_range: f32,
    neutral_beta: f32,

    /// Camera handed to the renderer; eye and target are rewritten by
    /// [`update`](Self::update).
    pub camera: Camera,
    /// Uniform block mirroring `camera`.
    pub uniform: CameraUniform,
}

impl CameraRig {
    /// Rig at rest at the configured base position.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let base_position = Vec3::from_array(options.base_position);
        let look_at = Vec3::from_array(options.look_at);
        let camera = Camera {
            eye: base_position,
            target: look_at,
            up: Vec3::Y,
            aspect: sanitize_aspect(aspect),
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        Self {
            offset: Vec2::ZERO,
            base_position,
            look_at,
            intensity: options.intensity,
            smoothing: options.smoothing,
            tilt_range: options.tilt_range,
            neutral_beta: options.neutral_beta,
            camera,
            uniform,
        }
    }

    /// Parallax target for the given inputs, before smoothing.
    #[must_use]
    pub fn target(&self, pointer: Vec2, tilt: Option<TiltInput>) -> Vec2 {
        let tilt = tilt_contribution(tilt, self.tilt_range, self.neutral_beta);
        (clamp_ndc(pointer) + tilt) * self.intensity
    }

    /// Advance one frame: move the offset a fixed fraction toward the
    /// target, then re-aim at the look-at point.
    pub fn update(&mut self, pointer: Vec2, tilt: Option<TiltInput>) {
        let target = self.target(pointer, tilt);
        self.offset = self.offset.lerp(target, self.smoothing);
        self.sync_camera();
    }

    /// Current pose and projection.
    #[must_use]
    pub fn view(&self) -> CameraView {
        self.camera.view()
    }

    /// Current smoothed offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Track a viewport size change.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.aspect = sanitize_aspect(width as f32 / height as f32);
        self.uniform.update_view_proj(&self.camera);
    }

    fn sync_camera(&mut self) {
        self.camera.eye =
            self.base_position + Vec3::new(self.offset.x, self.offset.y, 0.0);
        // Orientation is never smoothed; only the eye lags its target.
        self.camera.target = self.look_at;
        self.uniform.update_view_proj(&self.camera);
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
