//! Liquidity transition matrix
//!
//! Row-stochastic 5x5 matrix indexed by [`LiquidityClass`]: row = current
//! class, column = next class.

use serde::Serialize;
use ticksim_core::LiquidityClass;
use ticksim_ports::{SimulationError, SimulationResult};

/// Allowed deviation of a row sum from 1.0
pub const ROW_TOLERANCE: f64 = 1e-9;

const N: usize = LiquidityClass::COUNT;

/// Validated Markov transition matrix over liquidity classes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionMatrix {
    rows: [[f64; N]; N],
}

impl TransitionMatrix {
    /// Reference transition probabilities
    ///
    /// Each class keeps its state 97% of the time and leaks mostly into its
    /// immediate neighbours.
    pub const REFERENCE: [[f64; N]; N] = [
        [0.97, 0.025, 0.005, 0.0, 0.0],
        [0.0125, 0.97, 0.0125, 0.005, 0.0],
        [0.0025, 0.0125, 0.97, 0.0125, 0.0025],
        [0.0, 0.005, 0.0125, 0.97, 0.0125],
        [0.0, 0.0, 0.005, 0.025, 0.97],
    ];

    /// Validate and wrap a matrix
    ///
    /// Every entry must be a finite probability, every row must sum to 1 and
    /// the whole matrix to 5. Anything else is a fatal configuration error.
    pub fn new(rows: [[f64; N]; N]) -> SimulationResult<Self> {
        Self::validate(&rows).inspect_err(|err| log::error!("{}", err))?;
        Ok(Self { rows })
    }

    fn validate(rows: &[[f64; N]; N]) -> SimulationResult<()> {
        for (i, row) in rows.iter().enumerate() {
            if row.iter().any(|p| !p.is_finite() || *p < 0.0 || *p > 1.0) {
                return Err(SimulationError::MalformedTransitionMatrix {
                    row: Some(i),
                    sum: row.iter().sum(),
                });
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > ROW_TOLERANCE {
                return Err(SimulationError::MalformedTransitionMatrix { row: Some(i), sum });
            }
        }

        let total: f64 = rows.iter().flatten().sum();
        if (total - N as f64).abs() > ROW_TOLERANCE * N as f64 {
            return Err(SimulationError::MalformedTransitionMatrix {
                row: None,
                sum: total,
            });
        }
        Ok(())
    }

    /// The reference matrix
    pub fn reference() -> Self {
        Self {
            rows: Self::REFERENCE,
        }
    }

    /// Transition distribution out of `from`
    pub fn row(&self, from: LiquidityClass) -> &[f64; N] {
        &self.rows[from.index()]
    }

    /// Probability of moving from `from` to `to` in one step
    pub fn probability(&self, from: LiquidityClass, to: LiquidityClass) -> f64 {
        self.rows[from.index()][to.index()]
    }

    /// Total probability mass (5.0 for a valid matrix)
    pub fn total(&self) -> f64 {
        self.rows.iter().flatten().sum()
    }
}

impl Default for TransitionMatrix {
    fn default() -> Self {
        Self::reference()
    }
}
