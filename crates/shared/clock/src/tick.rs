use chrono::Duration;
use ticksim_core::Timestamp;
use ticksim_ports::{Clock, SimulationError, SimulationResult};

/// Simulated tick clock
///
/// Starts at a fixed instant and only moves forward when explicitly advanced.
/// Time never goes backwards, so stamps taken from it are non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickClock {
    current: Timestamp,
}

impl TickClock {
    /// Create a clock frozen at `start`
    pub fn new(start: Timestamp) -> Self {
        Self { current: start }
    }

    /// Advance by a strictly positive duration and return the new time
    pub fn advance(&mut self, delta: Duration) -> SimulationResult<Timestamp> {
        if delta <= Duration::zero() {
            return Err(SimulationError::InvalidParameter(format!(
                "clock advance must be positive, got {delta}"
            )));
        }
        self.current = self.current.checked_add_signed(delta).ok_or_else(|| {
            SimulationError::InvalidState(format!("clock overflow advancing by {delta}"))
        })?;
        Ok(self.current)
    }

    /// Move the clock to `time`, which must not be earlier than now
    pub fn advance_to(&mut self, time: Timestamp) -> SimulationResult<()> {
        if time < self.current {
            return Err(SimulationError::InvalidParameter(format!(
                "cannot move clock back from {} to {}",
                self.current, time
            )));
        }
        self.current = time;
        Ok(())
    }
}

impl Clock for TickClock {
    fn now(&self) -> Timestamp {
        self.current
    }

    fn name(&self) -> &str {
        "TickClock"
    }
}

/// Convert fractional seconds to a duration with nanosecond resolution
///
/// Rounds to the nearest nanosecond, never below one, so a positive draw
/// always moves a [`TickClock`].
pub fn seconds_to_duration(seconds: f64) -> Duration {
    let nanos = (seconds * 1e9).round();
    let nanos = if nanos >= i64::MAX as f64 {
        i64::MAX
    } else {
        (nanos as i64).max(1)
    };
    Duration::nanoseconds(nanos)
}
