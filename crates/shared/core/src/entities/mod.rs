mod liquidity;
mod tick;

pub use liquidity::LiquidityClass;
pub use tick::{FieldValue, TICK_COLUMNS, TickRecord};
