//! Frame source: ticks, a fixed-step driver and a wall-clock clock.

use web_time::{Duration, Instant};

/// One display refresh worth of time, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    /// Time since the clock started.
    pub elapsed: f32,
    /// Time since the previous tick.
    pub delta: f32,
}

impl FrameTick {
    /// Tick at `elapsed` seconds, `delta` seconds after the previous one.
    #[must_use]
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// Elapsed time as a [`Duration`], for timer comparisons. Negative or
    /// non-finite values read as zero.
    #[must_use]
    pub fn now(&self) -> Duration {
        Duration::try_from_secs_f32(self.elapsed).unwrap_or(Duration::ZERO)
    }
}

/// Steps a fixed-delta tick sequence, for headless drivers and tests.
#[derive(Debug, Clone)]
pub struct FixedStep {
    delta: f32,
    frame: u64,
}

impl FixedStep {
    /// Sequence advancing by `delta` seconds per frame.
    #[must_use]
    pub fn new(delta: f32) -> Self {
        Self { delta, frame: 0 }
    }

    /// Frames produced so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frame
    }
}

impl Iterator for FixedStep {
    type Item = FrameTick;

    fn next(&mut self) -> Option<FrameTick> {
        self.frame += 1;
        Some(FrameTick::new(self.frame as f32 * self.delta, self.delta))
    }
}

/// Wall-clock frame source.
pub struct FrameClock {
    /// When the clock started.
    start: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single delta, so a backgrounded tab does not teleport
    /// every pool on resume.
    max_delta: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            max_delta: Duration::from_millis(100),
        }
    }

    /// Call once per display refresh; returns the tick to animate with.
    #[must_use]
    pub fn tick(&mut self) -> FrameTick {
        self.tick_at(Instant::now())
    }

    /// Tick against an explicit timestamp.
    #[must_use]
    pub fn tick_at(&mut self, now: Instant) -> FrameTick {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        FrameTick::new(
            now.saturating_duration_since(self.start).as_secs_f32(),
            elapsed.min(self.max_delta).as_secs_f32(),
        )
    }
}
