/// Platform-agnostic input events.
///
/// Hosts translate their native pointer, orientation and resize events into
/// these and pass them to
/// [`Experience::handle_input`](super::Experience::handle_input).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved, already in normalized device coordinates.
    PointerMoved {
        /// Horizontal position, -1 (left) to 1 (right).
        x: f32,
        /// Vertical position, -1 (bottom) to 1 (top).
        y: f32,
    },
    /// Device orientation reading. Either angle may be missing.
    DeviceOrientation {
        /// Left/right tilt in degrees.
        gamma: Option<f32>,
        /// Front/back tilt in degrees.
        beta: Option<f32>,
    },
    /// The device has no orientation sensor, or access was denied.
    OrientationUnavailable,
    /// Viewport size changed, in physical pixels.
    Resized {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
}
