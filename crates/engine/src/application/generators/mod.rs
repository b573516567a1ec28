//! Random generators used by the simulation driver
//!
//! Every generator is a pure function of its parameters plus a caller-owned
//! random source, so the driver decides which stream each draw comes from.

mod gbm;
mod liquidity_chain;
mod quotes;
mod timer;

pub use gbm::{GbmStep, TIME_SCALE_DIVISOR, TRADING_DAYS, price_step};
pub use liquidity_chain::LiquidityChain;
pub use quotes::Quote;
pub use timer::{InterTickTimer, MAX_ZERO_DRAWS};
