//! Domain layer: pure value objects and validation rules

mod history;
mod params;
mod quote_profile;
mod transition_matrix;

pub use history::TickHistory;
pub use params::{LiquidityMode, TickParameters};
pub use quote_profile::{QuoteModel, QuotePresence, QuoteProfile};
pub use transition_matrix::{ROW_TOLERANCE, TransitionMatrix};
