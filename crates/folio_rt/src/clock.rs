use std::time::Instant;

use chrono::Local;
use folio_core::model::Clock;

/// Wall clock for live sessions: local human-readable timestamps for `date`
/// and monotonic milliseconds for the download scheduler.
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format("%a %b %e %Y %H:%M:%S %z").to_string()
    }
}

/// Deterministic clock for tests and scripted runs.
#[derive(Clone, Debug)]
pub struct FixedClock {
    stamp: String,
}

impl FixedClock {
    pub fn new(stamp: impl Into<String>) -> Self {
        Self {
            stamp: stamp.into(),
        }
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.stamp.clone()
    }
}
