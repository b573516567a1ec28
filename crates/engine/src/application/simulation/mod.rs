//! Simulation driver
//!
//! [`Instrument`] owns the evolving state of one simulated instrument and
//! calls the generators in a fixed order on every tick:
//!
//! 1. inter-tick timer (advances the clock)
//! 2. GBM price step over the drawn duration
//! 3. liquidity chain step (period stepping only)
//! 4. quote model on the new class and price (period stepping only)
//! 5. append the record to the history

mod instrument;

pub use instrument::{Instrument, InstrumentConfig, parse_liquidity_label};
