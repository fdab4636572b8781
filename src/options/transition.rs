use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Timings of the mode transitions and their overlays, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transitions", inline)]
#[serde(default)]
pub struct TransitionOptions {
    /// Time spent in the shatter mode before silence.
    #[schemars(title = "Shatter Duration", range(min = 100, max = 10000))]
    pub shatter_ms: u64,
    /// White flash fade-out when the shatter begins.
    #[schemars(title = "Flash", range(min = 0, max = 2000))]
    pub flash_ms: u64,
    /// Fade-out of the 3D canvas once silence begins.
    #[schemars(skip)]
    pub canvas_fade_ms: u64,
    /// Fade-in of the silence overlay.
    #[schemars(skip)]
    pub silence_fade_ms: u64,
    /// Simulated latency of the insight text provider.
    #[schemars(skip)]
    pub insight_latency_ms: u64,
}

impl TransitionOptions {
    /// Shatter duration as a [`Duration`].
    #[must_use]
    pub fn shatter_duration(&self) -> Duration {
        Duration::from_millis(self.shatter_ms)
    }

    /// Insight latency as a [`Duration`].
    #[must_use]
    pub fn insight_latency(&self) -> Duration {
        Duration::from_millis(self.insight_latency_ms)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            shatter_ms: 2500,
            flash_ms: 500,
            canvas_fade_ms: 1000,
            silence_fade_ms: 2000,
            insight_latency_ms: 800,
        }
    }
}
