//! Runner configuration
//!
//! JSON description of which instruments to simulate and what to render.
//! The embedded default reproduces a one-minute run of a single ticker.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ticksim_core::{LiquidityClass, Timestamp};
use ticksim_engine::{
    InstrumentConfig, LiquidityMode, TickParameters, TransitionMatrix, parse_liquidity_label,
};
use ticksim_ports::SimulationError;

use crate::error::{ConfigError, RunnerError};

/// Root configuration for a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Directory for file outputs such as `<ticker>.html`
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub render: RenderConfig,

    /// Instruments to simulate
    #[serde(default)]
    pub instruments: Vec<InstrumentEntry>,
}

/// Which outputs to produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Write an interactive `<ticker>.html` chart
    #[serde(default = "default_true")]
    pub html: bool,
    /// Print the history as a text table
    #[serde(default)]
    pub table: bool,
    /// Truncate printed tables to this many rows
    #[serde(default)]
    pub max_table_rows: Option<usize>,
}

/// One simulated instrument
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentEntry {
    pub ticker: String,
    pub start_value: f64,
    /// Creation time; defaults to the period start
    #[serde(default)]
    pub start_time: Option<Timestamp>,
    /// Liquidity label: UH, H, M, L or UL
    pub liquidity: String,
    #[serde(default)]
    pub mode: LiquidityMode,
    /// Seed for the instrument's random stream; omitted means entropy
    #[serde(default)]
    pub seed: Option<u64>,
    pub period: PeriodConfig,
    #[serde(default)]
    pub params: TickParameters,
    /// Extra single ticks (price and time only) after the period
    #[serde(default)]
    pub single_ticks: usize,
    /// Custom transition matrix; omitted means the reference matrix
    #[serde(default)]
    pub transition_matrix: Option<[[f64; LiquidityClass::COUNT]; LiquidityClass::COUNT]>,
}

/// Generation window, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    pub start: Timestamp,
    pub end: Timestamp,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            html: true,
            table: false,
            max_table_rows: None,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the embedded default configuration
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_json(include_str!("ticksim_config.json"))
    }

    /// Check the configuration before anything is simulated
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.instruments.is_empty() {
            return Err(ConfigError::NoInstruments);
        }

        let mut seen = HashSet::new();
        for entry in &self.instruments {
            if !is_file_safe_ticker(&entry.ticker) {
                return Err(ConfigError::InvalidInstrument(format!(
                    "{:?}: ticker must be non-blank and free of path separators",
                    entry.ticker
                )));
            }
            if !seen.insert(entry.ticker.as_str()) {
                return Err(ConfigError::DuplicateTicker(entry.ticker.clone()));
            }
            if entry.period.end < entry.period.start {
                return Err(ConfigError::InvalidInstrument(format!(
                    "{}: period ends before it starts",
                    entry.ticker
                )));
            }
            if let Some(start_time) = entry.start_time {
                if start_time > entry.period.start {
                    return Err(ConfigError::InvalidInstrument(format!(
                        "{}: start_time is after the period start",
                        entry.ticker
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Tickers name output files, so they must stay inside the output directory
fn is_file_safe_ticker(ticker: &str) -> bool {
    !ticker.trim().is_empty() && !ticker.contains(['/', '\\']) && !ticker.contains("..")
}

impl InstrumentEntry {
    /// Translate into engine construction parameters
    ///
    /// Checks everything the engine would reject at construction or on the
    /// first step, so a bad entry fails before any instrument is simulated.
    pub fn to_instrument_config(&self) -> Result<InstrumentConfig, RunnerError> {
        if !(self.start_value.is_finite() && self.start_value > 0.0) {
            let err = SimulationError::InvalidConstructionParameter(format!(
                "start_value for {} must be a positive real, got {}",
                self.ticker, self.start_value
            ));
            log::error!("{}", err);
            return Err(err.into());
        }
        self.params
            .validate()
            .inspect_err(|err| log::error!("{}: {}", self.ticker, err))?;
        let liquidity = parse_liquidity_label(&self.liquidity)?;
        let transition_matrix = match self.transition_matrix {
            Some(rows) => TransitionMatrix::new(rows)?,
            None => TransitionMatrix::reference(),
        };

        Ok(InstrumentConfig {
            ticker: self.ticker.clone(),
            start_value: self.start_value,
            start_time: Some(self.start_time.unwrap_or(self.period.start)),
            liquidity,
            mode: self.mode,
            seed: self.seed,
            transition_matrix,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_load_default_config() {
        let config = RunnerConfig::load_default().unwrap();
        config.validate().unwrap();
        assert_eq!(config.instruments.len(), 1);

        let alex = &config.instruments[0];
        assert_eq!(alex.ticker, "ALEX");
        assert_eq!(alex.start_value, 100.0);
        assert_eq!(alex.liquidity, "UH");
        assert_eq!(
            alex.period.start,
            Utc.with_ymd_and_hms(2018, 12, 27, 9, 0, 0).unwrap()
        );
        assert_eq!(
            alex.period.end,
            Utc.with_ymd_and_hms(2018, 12, 27, 9, 1, 0).unwrap()
        );
        assert_eq!(alex.params, TickParameters::default());
        assert!(config.render.html);
        assert!(config.render.table);
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let config = RunnerConfig::from_json(
            r#"{
                "instruments": [{
                    "ticker": "BETA",
                    "start_value": 25.5,
                    "liquidity": "M",
                    "period": { "start": "2020-01-01T00:00:00Z", "end": "2020-01-01T00:00:30Z" }
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.render.html);
        assert!(!config.render.table);

        let entry = &config.instruments[0];
        assert_eq!(entry.mode, LiquidityMode::Drifting);
        assert_eq!(entry.seed, None);
        assert_eq!(entry.single_ticks, 0);

        let engine = entry.to_instrument_config().unwrap();
        assert_eq!(engine.start_time, Some(entry.period.start));
        assert_eq!(engine.liquidity, LiquidityClass::Medium);
    }

    #[test]
    fn test_duplicate_ticker_rejected() {
        let mut config = RunnerConfig::load_default().unwrap();
        config.instruments.push(config.instruments[0].clone());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateTicker(t)) if t == "ALEX"
        ));
    }

    #[test]
    fn test_empty_config_rejected() {
        let config = RunnerConfig::from_json("{}").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::NoInstruments)));
    }

    #[test]
    fn test_inverted_period_rejected() {
        let mut config = RunnerConfig::load_default().unwrap();
        let period = config.instruments[0].period;
        config.instruments[0].period = PeriodConfig {
            start: period.end,
            end: period.start,
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInstrument(_))
        ));
    }

    #[test]
    fn test_unknown_liquidity_label() {
        let mut config = RunnerConfig::load_default().unwrap();
        config.instruments[0].liquidity = "XXL".to_string();
        let err = config.instruments[0].to_instrument_config().unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Simulation(SimulationError::InvalidConstructionParameter(_))
        ));
    }

    #[test]
    fn test_malformed_matrix_rejected() {
        let mut config = RunnerConfig::load_default().unwrap();
        let mut rows = TransitionMatrix::REFERENCE;
        rows[0][0] = 0.5;
        config.instruments[0].transition_matrix = Some(rows);
        let err = config.instruments[0].to_instrument_config().unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Simulation(SimulationError::MalformedTransitionMatrix { .. })
        ));
    }

    #[test]
    fn test_path_like_ticker_rejected() {
        for ticker in ["../escape", "a/b", "a\\b", "  "] {
            let mut config = RunnerConfig::load_default().unwrap();
            config.instruments[0].ticker = ticker.to_string();
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidInstrument(_))),
                "{ticker:?} accepted"
            );
        }
    }

    #[test]
    fn test_bad_start_value_rejected_before_engine() {
        let mut config = RunnerConfig::load_default().unwrap();
        config.instruments[0].start_value = 0.0;
        assert!(matches!(
            config.instruments[0].to_instrument_config(),
            Err(RunnerError::Simulation(
                SimulationError::InvalidConstructionParameter(_)
            ))
        ));
    }

    #[test]
    fn test_bad_params_rejected_before_engine() {
        let mut config = RunnerConfig::load_default().unwrap();
        config.instruments[0].params.alpha = -1.0;
        assert!(matches!(
            config.instruments[0].to_instrument_config(),
            Err(RunnerError::Simulation(SimulationError::InvalidParameter(_)))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = RunnerConfig::from_file("/nonexistent/ticksim.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
