//! History renderers
//!
//! Consumers of a finished [`TickHistory`](ticksim_engine::TickHistory):
//! an interactive HTML chart written to disk and a plain-text table.

mod html;
mod layout;
mod table;

pub use html::HtmlChartRenderer;
pub use layout::ChartLayout;
pub use table::TableRenderer;
