//! Ticksim Runner - tick history generation entry point
//!
//! Wires configuration to the engine and hands finished histories to the
//! renderers:
//!
//! - **Config**: JSON description of the instruments to simulate
//! - **Simulation**: one blocking task per instrument, each with its own seed
//! - **Render**: interactive HTML chart and plain-text table outputs
//!
//! ## Architecture
//!
//! ```text
//!   RunnerConfig (JSON)
//!          │
//!          ▼
//! ┌─────────────────────────────────────────┐
//! │              TickSimulation              │
//! │                                          │
//! │  ┌────────────┐        ┌────────────┐   │
//! │  │ Instrument │  ...   │ Instrument │   │
//! │  │  (seed A)  │        │  (seed B)  │   │
//! │  └─────┬──────┘        └─────┬──────┘   │
//! └────────┼─────────────────────┼──────────┘
//!          │ TickHistory         │
//!          ▼                     ▼
//!   ┌──────────────┐     ┌──────────────┐
//!   │ HTML chart   │     │ Text table   │
//!   └──────────────┘     └──────────────┘
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod simulation;

// Re-export main types
pub use config::{InstrumentEntry, PeriodConfig, RenderConfig, RunnerConfig};
pub use error::{ConfigError, RunnerError};
pub use render::{ChartLayout, HtmlChartRenderer, TableRenderer};
pub use simulation::{GenerationReport, TickSimulation, generate_history};
