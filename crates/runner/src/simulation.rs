//! Simulation - generation run orchestration
//!
//! Builds one instrument per configured entry, generates each history on its
//! own blocking task and hands the results to the configured renderers.

use std::sync::Arc;

use ticksim_core::{InstrumentId, Price};
use ticksim_engine::{Instrument, TickHistory};
use ticksim_ports::{HistoryRenderer, RenderedArtifact};

use crate::config::{InstrumentEntry, RunnerConfig};
use crate::error::RunnerError;
use crate::render::{HtmlChartRenderer, TableRenderer};

/// Generate the full history for one configured instrument
///
/// Runs the period, then any extra single ticks. Blocking; CPU-bound.
pub fn generate_history(entry: &InstrumentEntry) -> Result<TickHistory, RunnerError> {
    let mut instrument = Instrument::new(entry.to_instrument_config()?)?;
    instrument.period_ticks(entry.period.start, entry.period.end, &entry.params)?;
    for _ in 0..entry.single_ticks {
        instrument.one_tick(&entry.params)?;
    }
    Ok(instrument.into_history())
}

/// Outcome of generating and rendering one instrument
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub instrument_id: InstrumentId,
    pub history: TickHistory,
    /// Everything the renderers produced, in renderer order
    pub artifacts: Vec<RenderedArtifact>,
}

impl GenerationReport {
    /// Number of ticks after the initial record
    pub fn tick_count(&self) -> usize {
        self.history.tick_count()
    }

    pub fn final_price(&self) -> Price {
        self.history.latest().last
    }

    /// Rendered text outputs (tables)
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().filter_map(|artifact| match artifact {
            RenderedArtifact::Text(text) => Some(text.as_str()),
            RenderedArtifact::File(_) => None,
        })
    }
}

/// A configured generation run
pub struct TickSimulation {
    config: Arc<RunnerConfig>,
    renderers: Vec<Box<dyn HistoryRenderer>>,
}

impl TickSimulation {
    /// Validate the configuration and set up its renderers
    ///
    /// Every instrument entry is checked here, so a bad entry anywhere in
    /// the list stops the run before any history is generated.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        for entry in &config.instruments {
            entry.to_instrument_config()?;
        }

        let mut renderers: Vec<Box<dyn HistoryRenderer>> = Vec::new();
        if config.render.html {
            renderers.push(Box::new(HtmlChartRenderer::new(config.output_dir.clone())));
        }
        if config.render.table {
            let table = match config.render.max_table_rows {
                Some(max) => TableRenderer::with_max_rows(max),
                None => TableRenderer::new(),
            };
            renderers.push(Box::new(table));
        }

        Ok(Self {
            config: Arc::new(config),
            renderers,
        })
    }

    pub fn renderer_names(&self) -> Vec<&str> {
        self.renderers.iter().map(|r| r.name()).collect()
    }

    /// Generate every instrument in parallel, then render each history
    ///
    /// Instruments share no random state, so each runs on its own blocking
    /// task. Reports come back in configuration order. The first failure
    /// aborts the run.
    pub async fn run(&self) -> Result<Vec<GenerationReport>, RunnerError> {
        log::info!(
            "Generating {} instrument(s) with renderers {:?}",
            self.config.instruments.len(),
            self.renderer_names()
        );

        let handles: Vec<_> = (0..self.config.instruments.len())
            .map(|index| {
                let config = Arc::clone(&self.config);
                tokio::task::spawn_blocking(move || generate_history(&config.instruments[index]))
            })
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        for (entry, handle) in self.config.instruments.iter().zip(handles) {
            let history = handle
                .await
                .map_err(|e| RunnerError::Task(format!("{}: {}", entry.ticker, e)))??;

            let instrument_id = history.first().instrument_id.clone();
            let artifacts = self
                .renderers
                .iter()
                .map(|renderer| {
                    log::debug!("Rendering {} with {}", instrument_id, renderer.name());
                    renderer.render(&instrument_id, history.records())
                })
                .collect::<Result<Vec<_>, _>>()?;

            log::info!(
                "{}: {} ticks, last {:.4}",
                instrument_id,
                history.tick_count(),
                history.latest().last
            );
            reports.push(GenerationReport {
                instrument_id,
                history,
                artifacts,
            });
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> InstrumentEntry {
        let mut entry = RunnerConfig::load_default().unwrap().instruments.remove(0);
        entry.seed = Some(seed);
        entry
    }

    #[test]
    fn test_generate_history_covers_period() {
        let entry = seeded(7);
        let history = generate_history(&entry).unwrap();

        assert_eq!(history.first().timestamp, entry.period.start);
        assert_eq!(history.first().last, 100.0);
        assert!(history.tick_count() >= 1);
        assert!(history.latest().timestamp > entry.period.end);
    }

    #[test]
    fn test_single_ticks_appended_after_period() {
        let mut entry = seeded(11);
        let base = generate_history(&entry).unwrap();

        entry.single_ticks = 3;
        let extended = generate_history(&entry).unwrap();
        assert_eq!(extended.len(), base.len() + 3);
        assert_eq!(&extended.records()[..base.len()], base.records());

        let tail = &extended.records()[base.len() - 1..];
        for pair in tail.windows(2) {
            assert!(pair[1].timestamp > pair[0].timestamp);
            assert_eq!(pair[1].bid, pair[0].bid);
            assert_eq!(pair[1].ask, pair[0].ask);
            assert_eq!(pair[1].liquidity_class, pair[0].liquidity_class);
        }
    }

    #[test]
    fn test_same_seed_same_history() {
        let a = generate_history(&seeded(42)).unwrap();
        let b = generate_history(&seeded(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_renderers_when_disabled() {
        let mut config = RunnerConfig::load_default().unwrap();
        config.render.html = false;
        config.render.table = false;
        let sim = TickSimulation::new(config).unwrap();
        assert!(sim.renderer_names().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let config = RunnerConfig::from_json("{}").unwrap();
        assert!(matches!(
            TickSimulation::new(config),
            Err(RunnerError::Config(_))
        ));
    }
}
