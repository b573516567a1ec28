use chrono::{DurationRound, TimeDelta, Utc};
use ticksim_core::Timestamp;
use ticksim_ports::Clock;

/// Wall clock, truncated to whole microseconds
///
/// History timestamps are printed with microsecond precision, so a creation
/// time stamped from the wall clock carries no finer digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let now = Utc::now();
        now.duration_trunc(TimeDelta::microseconds(1)).unwrap_or(now)
    }

    fn name(&self) -> &str {
        "system"
    }
}
