use thiserror::Error;

/// Errors raised while configuring or running a simulation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid construction parameter: {0}")]
    InvalidConstructionParameter(String),

    #[error("Malformed transition matrix (row {row:?} sums to {sum})")]
    MalformedTransitionMatrix { row: Option<usize>, sum: f64 },

    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Parameter {name} is locked at {locked}, refusing {requested}")]
    ParameterLocked {
        name: &'static str,
        locked: f64,
        requested: f64,
    },
}

pub type SimulationResult<T> = std::result::Result<T, SimulationError>;

/// Errors raised by history renderers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Nothing to render for {0}")]
    EmptyHistory(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err.to_string())
    }
}
