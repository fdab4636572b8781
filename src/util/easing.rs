//! Easing functions for overlay fades.
//!
//! All functions are designed for <100ns evaluation time.

/// Easing function variants for fade curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        // NaN progress collapses to the start of the curve.
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
        }
    }

    /// Evaluate at `elapsed / duration`; a zero duration is already done.
    #[inline]
    #[must_use]
    pub fn progress(&self, elapsed: f32, duration: f32) -> f32 {
        if duration <= 0.0 {
            return 1.0;
        }
        self.evaluate(elapsed / duration)
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::QuadraticOut
    }
}
