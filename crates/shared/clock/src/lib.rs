//! Ticksim Clock Infrastructure
//!
//! Provides the two time sources the simulation needs:
//!
//! - [`SystemClock`]: wall-clock time, used to stamp instruments created
//!   without an explicit start time
//! - [`TickClock`]: simulated time that only moves when the engine advances
//!   it by an inter-tick duration
//!
//! ## Usage
//!
//! ```ignore
//! use ticksim_clock::{Clock, TickClock};
//! use chrono::Duration;
//!
//! let mut clock = TickClock::new(start);
//! clock.advance(Duration::milliseconds(1500))?;
//! assert_eq!(clock.now(), start + Duration::milliseconds(1500));
//! ```

mod system;
mod tick;

pub use system::SystemClock;
pub use tick::{TickClock, seconds_to_duration};

// Re-export the Clock trait for convenience
pub use ticksim_ports::Clock;
