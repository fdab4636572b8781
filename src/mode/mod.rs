//! Experience mode state machine: NOISE → SHATTER → SILENCE → NOISE.
//!
//! Everything here is polled against the frame clock's elapsed time. The
//! controller owns the only scheduled transition (the shatter delay) and
//! cancels it on teardown.

/// Mode controller and transitions.
pub mod controller;
/// Flash, canvas and silence-overlay opacities.
pub mod overlay;
/// Two-step confirmation prompt.
pub mod prompt;
/// Terminal view and its insight text provider.
pub mod silence;
/// Cancellable one-shot deadline.
pub mod timer;

pub use controller::ModeController;
pub use overlay::{OverlayState, Overlays};
pub use prompt::{Prompt, PromptStep};
pub use silence::{Affirmations, InsightProvider, InsightState, SilenceOverlay};
pub use timer::DelayTimer;
use web_time::Duration;

/// Top-level experience mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Scrolling tunnel, debris and prompt.
    #[default]
    Noise,
    /// Fragment explosion.
    Shatter,
    /// Terminal view.
    Silence,
}

impl Mode {
    /// The only mode this one may move to.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Noise => Self::Shatter,
            Self::Shatter => Self::Silence,
            Self::Silence => Self::Noise,
        }
    }

    /// Short uppercase label for logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Noise => "NOISE",
            Self::Shatter => "SHATTER",
            Self::Silence => "SILENCE",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A transition that just happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    /// Mode left.
    pub from: Mode,
    /// Mode entered.
    pub to: Mode,
    /// Frame-clock time of the transition.
    pub at: Duration,
}
