//! Playback speed setting

use super::constants::{DEFAULT_SPEED, DELAY_STEP_MS, MAX_SPEED, MIN_DELAY_MS, MIN_SPEED};
use std::fmt;
use std::time::Duration;

/// Playback speed in `[1, 10]`; higher is faster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u8);

impl Speed {
    /// Create a speed, clamping out-of-range values into `[1, 10]`
    pub fn new(value: u8) -> Self {
        Speed(value.clamp(MIN_SPEED, MAX_SPEED))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Delay between two rendered steps: `max(100, (11 - speed) * 100)` ms
    pub fn delay(self) -> Duration {
        let levels = u64::from(MAX_SPEED + 1 - self.0);
        Duration::from_millis((levels * DELAY_STEP_MS).max(MIN_DELAY_MS))
    }

    pub fn faster(self) -> Self {
        Speed::new(self.0.saturating_add(1))
    }

    pub fn slower(self) -> Self {
        Speed::new(self.0.saturating_sub(1))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(DEFAULT_SPEED)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
