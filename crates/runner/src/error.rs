use thiserror::Error;
use ticksim_ports::{RenderError, SimulationError};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("No instruments configured")]
    NoInstruments,
    #[error("Duplicate ticker: {0}")]
    DuplicateTicker(String),
    #[error("Invalid instrument config: {0}")]
    InvalidInstrument(String),
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Generation task failed: {0}")]
    Task(String),
}
