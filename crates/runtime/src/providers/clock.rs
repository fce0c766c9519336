use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use ocular_core::ClockOracle;

/// Wall-clock provider backed by the OS clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockOracle for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        // A clock before the epoch would make every interval comparison
        // meaningless; treat it as time zero rather than failing.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }
}

/// Manually driven clock for tests and offline simulation.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<u64>,
}

impl FixedClock {
    pub fn at(now: u64) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: u64) {
        self.now.set(now);
    }

    pub fn advance(&self, secs: u64) {
        self.now.set(self.now.get() + secs);
    }
}

impl ClockOracle for FixedClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.now.get()
    }
}
