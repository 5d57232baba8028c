// Playback pacing constants

/// Slowest playback speed
pub const MIN_SPEED: u8 = 1;

/// Fastest playback speed
pub const MAX_SPEED: u8 = 10;

/// Speed used when none is configured
pub const DEFAULT_SPEED: u8 = 5;

/// Shortest delay between two rendered steps, in milliseconds
pub const MIN_DELAY_MS: u64 = 100;

/// Delay added per speed level below the maximum, in milliseconds
pub const DELAY_STEP_MS: u64 = 100;

/// How long the UI event loop waits for input before advancing playback
pub const POLL_INTERVAL_MS: u64 = 20;
