//! Instrument identity

mod instrument_id;

pub use instrument_id::InstrumentId;
