//! Ticksim Ports
//!
//! Port definitions (traits) for the ticksim workspace.
//! These define the boundaries between the simulation engine and the
//! collaborators around it (clocks, renderers).

mod clock;
mod error;
mod render;

pub use clock::Clock;
pub use error::{RenderError, RenderResult, SimulationError, SimulationResult};
pub use render::{HistoryRenderer, RenderedArtifact};
