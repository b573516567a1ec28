//! Discrete-time liquidity Markov chain

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use ticksim_core::LiquidityClass;
use ticksim_ports::{SimulationError, SimulationResult};

use crate::domain::TransitionMatrix;

/// Samples the next liquidity class from a validated transition matrix
///
/// Memoryless: the next class depends only on the class passed in.
#[derive(Debug, Clone)]
pub struct LiquidityChain {
    matrix: TransitionMatrix,
    /// One categorical sampler per matrix row
    rows: Vec<WeightedIndex<f64>>,
}

impl LiquidityChain {
    pub fn new(matrix: TransitionMatrix) -> SimulationResult<Self> {
        let rows = LiquidityClass::ALL
            .iter()
            .map(|class| {
                let row = matrix.row(*class);
                WeightedIndex::new(row).map_err(|_| {
                    SimulationError::MalformedTransitionMatrix {
                        row: Some(class.index()),
                        sum: row.iter().sum(),
                    }
                })
            })
            .collect::<SimulationResult<Vec<_>>>()?;

        Ok(Self { matrix, rows })
    }

    /// Chain over the reference matrix
    pub fn reference() -> SimulationResult<Self> {
        Self::new(TransitionMatrix::reference())
    }

    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Draw the class following `from`
    pub fn next_class<R: Rng + ?Sized>(&self, from: LiquidityClass, rng: &mut R) -> LiquidityClass {
        let next = self.rows[from.index()].sample(rng);
        LiquidityClass::from_index(next).unwrap_or(from)
    }
}
