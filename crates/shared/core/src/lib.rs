//! Ticksim Core Domain
//!
//! Pure domain types for the ticksim tick history generator.
//! This crate contains no I/O and no randomness, and is 100% unit testable.

pub mod entities;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{FieldValue, LiquidityClass, TICK_COLUMNS, TickRecord};
pub use instruments::InstrumentId;
pub use values::{Price, Timestamp};
