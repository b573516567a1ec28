//! Tick history simulation engine
//!
//! Synthesizes a tick-by-tick price and quote history for a single
//! instrument. Prices follow Geometric Brownian Motion over gamma-distributed
//! inter-tick times; a five-state liquidity Markov chain drives the bid/ask
//! spread and whether each side is quoted at all.

pub mod application;
pub mod domain;

// Re-export key types at crate root
pub use application::generators::{GbmStep, InterTickTimer, LiquidityChain, Quote, price_step};
pub use application::simulation::{Instrument, InstrumentConfig, parse_liquidity_label};
pub use domain::{
    LiquidityMode, QuoteModel, QuotePresence, QuoteProfile, TickHistory, TickParameters,
    TransitionMatrix,
};
