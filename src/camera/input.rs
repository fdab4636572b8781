use glam::Vec2;

/// Raw device-orientation reading, in degrees.
///
/// Browsers may deliver an orientation event with either angle missing;
/// missing angles read as 0 degrees. A device that never delivers a reading
/// contributes nothing (see [`CameraRig`](super::rig::CameraRig)).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltInput {
    /// Left/right tilt (-90 to 90).
    pub gamma: Option<f32>,
    /// Front/back tilt (-180 to 180).
    pub beta: Option<f32>,
}

impl TiltInput {
    /// Reading with both angles present.
    #[must_use]
    pub fn new(gamma: f32, beta: f32) -> Self {
        Self {
            gamma: Some(gamma),
            beta: Some(beta),
        }
    }

    /// Map the reading to a `[-1, 1]²` parallax contribution.
    ///
    /// `range` degrees of tilt saturate an axis; beta is centered on
    /// `neutral_beta` (the usual holding angle).
    #[must_use]
    pub fn contribution(&self, range: f32, neutral_beta: f32) -> Vec2 {
        let gamma = finite_or_zero(self.gamma);
        let beta = finite_or_zero(self.beta);
        Vec2::new(
            (gamma / range).clamp(-1.0, 1.0),
            ((beta - neutral_beta) / range).clamp(-1.0, 1.0),
        )
    }
}

/// Parallax contribution of an optional reading; a device that never
/// reported one contributes nothing.
#[must_use]
pub fn tilt_contribution(
    tilt: Option<TiltInput>,
    range: f32,
    neutral_beta: f32,
) -> Vec2 {
    tilt.map_or(Vec2::ZERO, |t| t.contribution(range, neutral_beta))
}

fn finite_or_zero(angle: Option<f32>) -> f32 {
    angle.filter(|a| a.is_finite()).unwrap_or(0.0)
}

/// Convert a window-space pointer position (pixels, y down) to normalized
/// device coordinates (`[-1, 1]²`, y up).
///
/// A zero-sized viewport yields the centre.
#[must_use]
pub fn pointer_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    clamp_ndc(Vec2::new(
        (x / width) * 2.0 - 1.0,
        -(y / height) * 2.0 + 1.0,
    ))
}

/// Clamp a pointer position into `[-1, 1]²`; non-finite axes read as 0.
#[must_use]
pub fn clamp_ndc(p: Vec2) -> Vec2 {
    let axis = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
    Vec2::new(axis(p.x), axis(p.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_angles_read_as_zero_degrees() {
        let tilt = TiltInput::default();
        // beta reads as 0, which is 45 degrees below the neutral angle.
        assert_eq!(tilt.contribution(45.0, 45.0), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn tilt_maps_and_clamps() {
        let c = TiltInput::new(22.5, 67.5).contribution(45.0, 45.0);
        assert!((c.x - 0.5).abs() < 1e-6);
        assert!((c.y - 0.5).abs() < 1e-6);

        let c = TiltInput::new(-90.0, 180.0).contribution(45.0, 45.0);
        assert_eq!(c, Vec2::new(-1.0, 1.0));

        let c = TiltInput::new(0.0, 45.0).contribution(45.0, 45.0);
        assert_eq!(c, Vec2::ZERO);
    }

    #[test]
    fn absent_reading_contributes_nothing() {
        assert_eq!(tilt_contribution(None, 45.0, 45.0), Vec2::ZERO);
        assert_eq!(
            tilt_contribution(Some(TiltInput::new(45.0, 90.0)), 45.0, 45.0),
            Vec2::ONE
        );
    }

    #[test]
    fn nan_angles_read_as_zero() {
        let tilt = TiltInput {
            gamma: Some(f32::NAN),
            beta: Some(45.0),
        };
        assert_eq!(tilt.contribution(45.0, 45.0), Vec2::ZERO);
    }

    #[test]
    fn pointer_corners() {
        assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(
            pointer_ndc(800.0, 600.0, 800.0, 600.0),
            Vec2::new(1.0, -1.0)
        );
        assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
        assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
        assert_eq!(
            pointer_ndc(-400.0, 900.0, 800.0, 600.0),
            Vec2::new(-1.0, -1.0)
        );
    }
}
