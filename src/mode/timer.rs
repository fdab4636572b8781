use web_time::Duration;

/// One-shot deadline polled against the frame clock.
///
/// Stands in for a scheduled callback: the owner arms it, polls it each
/// frame, and cancels it on teardown so nothing fires afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DelayTimer {
    deadline: Option<Duration>,
}

impl DelayTimer {
    /// Timer with nothing scheduled.
    #[must_use]
    pub fn idle() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending
    /// deadline.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Drop the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Whether a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the deadline, if pending.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_sub(now))
    }

    /// Fire at most once: true the first time `now` reaches the deadline.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_deadline() {
        let mut t = DelayTimer::idle();
        t.schedule(Duration::from_millis(100), Duration::from_millis(2500));
        assert!(!t.poll(Duration::from_millis(2599)));
        assert_eq!(
            t.remaining(Duration::from_millis(2000)),
            Some(Duration::from_millis(600))
        );
        assert!(t.poll(Duration::from_millis(2600)));
        assert!(!t.poll(Duration::from_millis(9000)));
        assert!(!t.is_pending());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut t = DelayTimer::idle();
        t.schedule(Duration::ZERO, Duration::from_millis(10));
        assert!(t.cancel());
        assert!(!t.cancel());
        assert!(!t.poll(Duration::from_secs(60)));
    }
}
