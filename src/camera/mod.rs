//! Camera system for the tunnel scene.
//!
//! Provides a parallax rig that follows pointer and device tilt, always
//! aimed down the tunnel.

/// Core camera struct and uniform types.
pub mod core;
/// Pointer and device-orientation input mapping.
pub mod input;
/// Smoothed parallax camera rig.
pub mod rig;

pub use self::core::{Camera, CameraUniform, CameraView};
pub use input::{pointer_ndc, tilt_contribution, TiltInput};
pub use rig::CameraRig;
