use web_time::Duration;

use super::{DelayTimer, Mode, ModeChange};

/// Owns the current [`Mode`] and the delayed SHATTER → SILENCE transition.
///
/// After [`teardown`](Self::teardown) (or drop) every operation is a no-op,
/// so a torn-down experience never changes mode again.
#[derive(Debug)]
pub struct ModeController {
    mode: Mode,
    previous: Option<Mode>,
    entered_at: Duration,
    shatter_delay: Duration,
    shatter_timer: DelayTimer,
    torn_down: bool,
}

impl ModeController {
    /// Controller in NOISE, entered at time zero.
    #[must_use]
    pub fn new(shatter_delay: Duration) -> Self {
        Self {
            mode: Mode::Noise,
            previous: None,
            entered_at: Duration::ZERO,
            shatter_delay,
            shatter_timer: DelayTimer::idle(),
            torn_down: false,
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Mode before the last transition, if any happened.
    #[must_use]
    pub fn previous(&self) -> Option<Mode> {
        self.previous
    }

    /// Time the current mode was entered.
    #[must_use]
    pub fn entered_at(&self) -> Duration {
        self.entered_at
    }

    /// Time spent in the current mode as of `now`.
    #[must_use]
    pub fn time_in_mode(&self, now: Duration) -> Duration {
        now.saturating_sub(self.entered_at)
    }

    /// Whether the SHATTER → SILENCE transition is still scheduled.
    #[must_use]
    pub fn is_timer_pending(&self) -> bool {
        self.shatter_timer.is_pending()
    }

    /// Whether [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// NOISE → SHATTER, arming the shatter delay. Ignored in other modes.
    pub fn confirm_shatter(&mut self, now: Duration) -> Option<ModeChange> {
        if self.torn_down || self.mode != Mode::Noise {
            return None;
        }
        self.shatter_timer.schedule(now, self.shatter_delay);
        Some(self.enter(Mode::Shatter, now))
    }

    /// SHATTER → SILENCE once the shatter delay has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<ModeChange> {
        if self.torn_down || self.mode != Mode::Shatter {
            return None;
        }
        if !self.shatter_timer.poll(now) {
            return None;
        }
        Some(self.enter(Mode::Silence, now))
    }

    /// SILENCE → NOISE. Ignored in other modes.
    pub fn reset_to_noise(&mut self, now: Duration) -> Option<ModeChange> {
        if self.torn_down || self.mode != Mode::Silence {
            return None;
        }
        Some(self.enter(Mode::Noise, now))
    }

    /// Cancel every pending timer; later calls change nothing.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if self.shatter_timer.cancel() {
            log::debug!("cancelled pending {} transition", Mode::Silence);
        }
        self.torn_down = true;
    }

    fn enter(&mut self, to: Mode, now: Duration) -> ModeChange {
        let change = ModeChange {
            from: self.mode,
            to,
            at: now,
        };
        log::info!(
            "mode {} -> {} at {:.3}s",
            change.from,
            change.to,
            now.as_secs_f32()
        );
        self.previous = Some(self.mode);
        self.mode = to;
        self.entered_at = now;
        change
    }
}

impl Drop for ModeController {
    fn drop(&mut self) {
        self.teardown();
    }
}
