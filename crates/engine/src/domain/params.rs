use serde::{Deserialize, Serialize};
use ticksim_ports::{SimulationError, SimulationResult};

/// How the liquidity chain is anchored between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidityMode {
    /// Every draw starts from the instrument's origin class, so liquidity
    /// never wanders away for more than one tick
    NonReverting,
    /// Every draw starts from the previous draw, so liquidity can wander
    /// across the whole horizon
    #[default]
    Drifting,
}

/// Generation parameters for stepping an instrument
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickParameters {
    /// Gamma shape of the inter-tick time
    pub alpha: f64,
    /// Gamma scale of the inter-tick time, in seconds
    pub theta: f64,
    /// Annualized volatility
    pub volatility: f64,
    /// Annualized drift rate
    pub rate: f64,
}

impl Default for TickParameters {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            theta: 2.0,
            volatility: 0.2,
            rate: 0.01,
        }
    }
}

impl TickParameters {
    pub fn validate(&self) -> SimulationResult<()> {
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "alpha must be positive, got {}",
                self.alpha
            )));
        }
        if !(self.theta.is_finite() && self.theta > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "theta must be positive, got {}",
                self.theta
            )));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if !self.rate.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "rate must be finite, got {}",
                self.rate
            )));
        }
        Ok(())
    }
}
