use std::path::PathBuf;

use ticksim_core::{InstrumentId, TickRecord};

use crate::error::RenderResult;

/// What a renderer produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedArtifact {
    /// A file written to disk (e.g. `<ticker>.html`)
    File(PathBuf),
    /// In-memory text (e.g. a printed table)
    Text(String),
}

/// Port for consumers of a finished history
///
/// Renderers only read the ordered records; they never reach back into
/// the instrument that produced them.
pub trait HistoryRenderer: Send + Sync {
    /// Render the history of one instrument
    fn render(&self, instrument_id: &InstrumentId, records: &[TickRecord])
    -> RenderResult<RenderedArtifact>;

    /// Get the renderer's name for logging
    fn name(&self) -> &str;
}
