//! Single cancellable deadline
//!
//! [`Ticker`] stands in for a one-shot timer. It holds at most one pending
//! deadline; scheduling again replaces it and cancelling drops it. Nothing
//! fires on its own: the owner polls it with the current time.

use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct Ticker {
    due: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the ticker for `at`, replacing any pending deadline
    pub fn schedule(&mut self, at: Instant) {
        self.due = Some(at);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.due
    }

    /// Fire if the deadline has passed. A fired ticker is disarmed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_fires_once_when_due() {
        let start = Instant::now();
        let mut ticker = Ticker::new();
        ticker.schedule(start + Duration::from_millis(100));

        assert!(!ticker.poll(start));
        assert!(ticker.poll(start + Duration::from_millis(100)));
        assert!(!ticker.poll(start + Duration::from_millis(500)));
        assert_eq!(ticker.next_due(), None);
    }

    #[test]
    fn test_cancel_and_reschedule() {
        let start = Instant::now();
        let mut ticker = Ticker::new();
        ticker.schedule(start);
        ticker.cancel();
        assert!(!ticker.poll(start + Duration::from_secs(1)));

        ticker.schedule(start + Duration::from_millis(50));
        ticker.schedule(start + Duration::from_millis(200));
        assert!(!ticker.poll(start + Duration::from_millis(100)));
        assert!(ticker.poll(start + Duration::from_millis(200)));
    }
}
