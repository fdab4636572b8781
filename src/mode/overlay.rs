use web_time::Duration;

use super::{InsightState, Mode, SilenceOverlay};
use crate::options::TransitionOptions;
use crate::util::easing::EasingFunction;

/// Opacities of the layers drawn over (or instead of) the 3D canvas, plus
/// the terminal view's headline.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    /// White flash shown when the shatter starts.
    pub flash_opacity: f32,
    /// The 3D canvas itself.
    pub canvas_opacity: f32,
    /// Terminal view.
    pub silence_opacity: f32,
    /// Terminal headline, once loaded.
    pub insight: Option<InsightState>,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            flash_opacity: 0.0,
            canvas_opacity: 1.0,
            silence_opacity: 0.0,
            insight: None,
        }
    }
}

/// Fade timings for the transition overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlays {
    flash: f32,
    canvas_fade: f32,
    silence_fade: f32,
}

impl Overlays {
    /// Timings in seconds taken from `options`.
    #[must_use]
    pub fn new(options: &TransitionOptions) -> Self {
        Self {
            flash: options.flash_ms as f32 / 1000.0,
            canvas_fade: options.canvas_fade_ms as f32 / 1000.0,
            silence_fade: options.silence_fade_ms as f32 / 1000.0,
        }
    }

    /// Overlay state `in_mode` after entering `mode`.
    ///
    /// `previous` is the mode left on entry; the canvas only fades back in
    /// when returning from SILENCE.
    #[must_use]
    pub fn state(
        &self,
        mode: Mode,
        previous: Option<Mode>,
        in_mode: Duration,
        silence: Option<&SilenceOverlay>,
    ) -> OverlayState {
        let t = in_mode.as_secs_f32();
        match mode {
            Mode::Noise => {
                let canvas_opacity = if previous == Some(Mode::Silence) {
                    EasingFunction::Linear.progress(t, self.canvas_fade)
                } else {
                    1.0
                };
                OverlayState {
                    canvas_opacity,
                    ..OverlayState::default()
                }
            }
            Mode::Shatter => OverlayState {
                flash_opacity: 1.0
                    - EasingFunction::Linear.progress(t, self.flash),
                ..OverlayState::default()
            },
            Mode::Silence => OverlayState {
                flash_opacity: 0.0,
                canvas_opacity: 1.0
                    - EasingFunction::Linear.progress(t, self.canvas_fade),
                silence_opacity: EasingFunction::QuadraticOut
                    .progress(t, self.silence_fade),
                insight: silence.map(|s| s.insight().clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlays() -> Overlays {
        Overlays::new(&TransitionOptions::default())
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn flash_fades_over_half_a_second() {
        let o = overlays();
        let start = o.state(Mode::Shatter, Some(Mode::Noise), ms(0), None);
        assert_eq!(start.flash_opacity, 1.0);
        let mid = o.state(Mode::Shatter, Some(Mode::Noise), ms(250), None);
        assert!((mid.flash_opacity - 0.5).abs() < 1e-5);
        let end = o.state(Mode::Shatter, Some(Mode::Noise), ms(500), None);
        assert_eq!(end.flash_opacity, 0.0);
        assert_eq!(end.canvas_opacity, 1.0);
    }

    #[test]
    fn silence_hides_canvas_and_fades_in() {
        let o = overlays();
        let start = o.state(Mode::Silence, Some(Mode::Shatter), ms(0), None);
        assert_eq!(start.canvas_opacity, 1.0);
        assert_eq!(start.silence_opacity, 0.0);
        let canvas_done =
            o.state(Mode::Silence, Some(Mode::Shatter), ms(1000), None);
        assert_eq!(canvas_done.canvas_opacity, 0.0);
        assert!(canvas_done.silence_opacity < 1.0);
        let done = o.state(Mode::Silence, Some(Mode::Shatter), ms(2000), None);
        assert_eq!(done.silence_opacity, 1.0);
    }

    #[test]
    fn canvas_returns_after_reset() {
        let o = overlays();
        let first = o.state(Mode::Noise, None, ms(0), None);
        assert_eq!(first.canvas_opacity, 1.0);
        let back = o.state(Mode::Noise, Some(Mode::Silence), ms(0), None);
        assert_eq!(back.canvas_opacity, 0.0);
        let back = o.state(Mode::Noise, Some(Mode::Silence), ms(1000), None);
        assert_eq!(back.canvas_opacity, 1.0);
    }
}
