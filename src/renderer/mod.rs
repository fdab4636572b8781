//! Seam between the animation loop and whatever draws it.
//!
//! The experience never touches a graphics API. Each frame it pushes the
//! camera uniform, wall poses, instance buffers and overlay state into a
//! [`SceneRenderer`]; hosts implement the trait over their own backend.

/// Per-instance model matrices.
pub mod instance;

use glam::Affine3A;
pub use instance::InstanceTransform;

use crate::camera::core::CameraUniform;
use crate::mode::{Mode, OverlayState};
use crate::tunnel::{WallLayout, WallSide};

/// Instanced object pools the experience writes each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstancePool {
    /// Drifting debris (NOISE).
    Debris,
    /// Exploding fragments (SHATTER).
    Fragments,
}

impl InstancePool {
    /// Every pool, in upload order.
    pub const ALL: [InstancePool; 2] = [Self::Debris, Self::Fragments];

    fn index(self) -> usize {
        match self {
            Self::Debris => 0,
            Self::Fragments => 1,
        }
    }
}

/// Receiver of per-frame scene output.
pub trait SceneRenderer {
    /// Whether the backend can accept a frame. A frame offered while this
    /// is false is skipped without advancing any animation.
    fn is_ready(&self) -> bool {
        true
    }

    /// Called first on every accepted frame.
    fn begin_frame(&mut self, _mode: Mode) {}

    /// Camera for this frame.
    fn set_camera(&mut self, camera: &CameraUniform);

    /// Static layout of one wall. Sent once before the first pose.
    fn set_wall_layout(&mut self, side: WallSide, layout: &WallLayout);

    /// World transform of one wall's tiles for this frame.
    fn set_wall_pose(&mut self, side: WallSide, pose: Affine3A);

    /// Replace the contents of one instance pool. Inactive pools are
    /// written empty.
    fn write_instances(
        &mut self,
        pool: InstancePool,
        instances: &[InstanceTransform],
    );

    /// Overlay opacities and terminal headline.
    fn set_overlay(&mut self, overlay: &OverlayState);
}

/// Renderer that keeps the latest frame's output in memory.
///
/// Backs the headless driver and the browser host's buffer export, and
/// doubles as a test double.
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    /// When false, frames are refused.
    pub ready: bool,
    /// Accepted frames.
    pub frames: u64,
    /// Mode of the last accepted frame.
    pub mode: Option<Mode>,
    /// Last camera uniform.
    pub camera: Option<CameraUniform>,
    /// Tile count of each wall layout received, by [`WallSide::index`].
    pub wall_tiles: [Option<usize>; 4],
    /// Last pose of each wall.
    pub wall_poses: [Option<Affine3A>; 4],
    /// Last overlay state.
    pub overlay: OverlayState,
    pools: [Vec<InstanceTransform>; 2],
}

impl FrameRecorder {
    /// Recorder that accepts every frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ready: true,
            frames: 0,
            mode: None,
            camera: None,
            wall_tiles: [None; 4],
            wall_poses: [None; 4],
            overlay: OverlayState::default(),
            pools: [Vec::new(), Vec::new()],
        }
    }

    /// Last contents of `pool`.
    #[must_use]
    pub fn instances(&self, pool: InstancePool) -> &[InstanceTransform] {
        &self.pools[pool.index()]
    }
}

impl Default for FrameRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneRenderer for FrameRecorder {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn begin_frame(&mut self, mode: Mode) {
        self.frames += 1;
        self.mode = Some(mode);
    }

    fn set_camera(&mut self, camera: &CameraUniform) {
        self.camera = Some(*camera);
    }

    fn set_wall_layout(&mut self, side: WallSide, layout: &WallLayout) {
        self.wall_tiles[side.index()] = Some(layout.tiles().count());
    }

    fn set_wall_pose(&mut self, side: WallSide, pose: Affine3A) {
        self.wall_poses[side.index()] = Some(pose);
    }

    fn write_instances(
        &mut self,
        pool: InstancePool,
        instances: &[InstanceTransform],
    ) {
        let buffer = &mut self.pools[pool.index()];
        buffer.clear();
        buffer.extend_from_slice(instances);
    }

    fn set_overlay(&mut self, overlay: &OverlayState) {
        self.overlay = overlay.clone();
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;

    #[test]
    fn pools_are_replaced_not_appended() {
        let mut r = FrameRecorder::new();
        let one = InstanceTransform::new(Vec3::X, Quat::IDENTITY, 1.0);
        r.write_instances(InstancePool::Debris, &[one, one]);
        r.write_instances(InstancePool::Debris, &[one]);
        assert_eq!(r.instances(InstancePool::Debris).len(), 1);
        assert!(r.instances(InstancePool::Fragments).is_empty());
    }

    #[test]
    fn begin_frame_counts() {
        let mut r = FrameRecorder::default();
        r.begin_frame(Mode::Noise);
        r.begin_frame(Mode::Shatter);
        assert_eq!(r.frames, 2);
        assert_eq!(r.mode, Some(Mode::Shatter));
    }
}
