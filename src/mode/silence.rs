use rand::Rng;
use web_time::Duration;

use super::DelayTimer;
use crate::util::rng::SceneRng;

/// Lines the default provider picks from.
pub const AFFIRMATIONS: [&str; 10] = [
    "True confidence is not the absence of doubt, but the courage to proceed despite it.",
    "Your worth is not defined by what you produce.",
    "You are exactly where you need to be.",
    "Doubt is a sign of growth, not incompetence.",
    "Silence is where the truth resides.",
    "No one has it all figured out.",
    "You belong here.",
    "It is safe to be a work in progress.",
    "Breathe. You are enough.",
    "The feeling of being a fraud is the growing pain of competence.",
];

/// Source of the terminal view's headline.
pub trait InsightProvider {
    /// Produce one headline.
    fn insight(&mut self, rng: &mut SceneRng) -> String;

    /// How long a request takes before its text is available.
    fn latency(&self) -> Duration;
}

/// Default provider: one of a fixed set of lines after a fixed latency.
#[derive(Debug, Clone)]
pub struct Affirmations {
    lines: Vec<String>,
    latency: Duration,
}

impl Affirmations {
    /// The built-in lines with the given latency.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self::with_lines(AFFIRMATIONS.iter().map(|s| (*s).to_owned()), latency)
    }

    /// Custom lines. An empty set yields empty headlines.
    pub fn with_lines(
        lines: impl IntoIterator<Item = String>,
        latency: Duration,
    ) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            latency,
        }
    }

    /// All lines this provider can return.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl InsightProvider for Affirmations {
    fn insight(&mut self, rng: &mut SceneRng) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let i = rng.random_range(0..self.lines.len());
        self.lines[i].clone()
    }

    fn latency(&self) -> Duration {
        self.latency
    }
}

/// Headline of the terminal view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightState {
    /// Request in flight.
    Loading,
    /// Text arrived.
    Ready(String),
}

/// Terminal view: issues one insight request on open and applies its text
/// once the provider's latency has passed.
#[derive(Debug)]
pub struct SilenceOverlay {
    opened_at: Duration,
    request: DelayTimer,
    insight: InsightState,
}

impl SilenceOverlay {
    /// Open at `now`, issuing the insight request.
    pub fn open<P: InsightProvider + ?Sized>(
        now: Duration,
        provider: &P,
    ) -> Self {
        let mut request = DelayTimer::idle();
        request.schedule(now, provider.latency());
        Self {
            opened_at: now,
            request,
            insight: InsightState::Loading,
        }
    }

    /// Resolve the pending request once its latency has passed. Returns
    /// true on the frame the text arrives.
    pub fn poll<P: InsightProvider + ?Sized>(
        &mut self,
        now: Duration,
        provider: &mut P,
        rng: &mut SceneRng,
    ) -> bool {
        if !self.request.poll(now) {
            return false;
        }
        let text = provider.insight(rng);
        log::debug!("insight ready after {:?}", now.saturating_sub(self.opened_at));
        self.insight = InsightState::Ready(text);
        true
    }

    /// Discard the pending request; its text is never applied.
    pub fn close(&mut self) {
        if self.request.cancel() {
            log::debug!("discarded pending insight request");
        }
    }

    /// Current headline state.
    #[must_use]
    pub fn insight(&self) -> &InsightState {
        &self.insight
    }

    /// Whether the request is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.insight, InsightState::Loading)
    }

    /// Time the overlay was opened.
    #[must_use]
    pub fn opened_at(&self) -> Duration {
        self.opened_at
    }
}
