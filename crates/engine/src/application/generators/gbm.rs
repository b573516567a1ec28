//! Geometric Brownian Motion price step
//!
//! Exact GBM transition over an arbitrary elapsed time:
//!
//! ```text
//! dt      = elapsed_seconds / (365 * 24)
//! sigma_d = sigma / sqrt(252)
//! S1      = S0 * exp((r - sigma_d^2 / 2) * dt + sigma_d * Z * sqrt(dt)),   Z ~ N(0, 1)
//! ```
//!
//! Volatility is scaled per trading day while time is scaled by calendar
//! hours. The mix is kept as-is so generated paths match reference outputs.

use rand::Rng;
use rand_distr::StandardNormal;
use ticksim_ports::{SimulationError, SimulationResult};

/// Divisor turning elapsed seconds into the model's time unit
pub const TIME_SCALE_DIVISOR: f64 = 365.0 * 24.0;

/// Trading days used to scale annualized volatility
pub const TRADING_DAYS: f64 = 252.0;

/// GBM step with fixed drift and volatility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmStep {
    rate: f64,
    volatility: f64,
    /// sigma / sqrt(252)
    step_volatility: f64,
}

impl GbmStep {
    pub fn new(rate: f64, volatility: f64) -> SimulationResult<Self> {
        if !rate.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "rate must be finite, got {rate}"
            )));
        }
        if !(volatility.is_finite() && volatility >= 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "volatility must be non-negative, got {volatility}"
            )));
        }
        Ok(Self {
            rate,
            volatility,
            step_volatility: volatility / TRADING_DAYS.sqrt(),
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Advance `last` across `elapsed_seconds`
    ///
    /// No normal draw is consumed when no time passes or when volatility is
    /// zero; both cases are deterministic.
    pub fn step<R: Rng + ?Sized>(
        &self,
        elapsed_seconds: f64,
        last: f64,
        rng: &mut R,
    ) -> SimulationResult<f64> {
        if !(last.is_finite() && last > 0.0) {
            return Err(SimulationError::InvalidState(format!(
                "price step needs a positive prior price, got {last}"
            )));
        }
        if !(elapsed_seconds.is_finite() && elapsed_seconds >= 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "elapsed time must be non-negative, got {elapsed_seconds}"
            )));
        }
        if elapsed_seconds == 0.0 {
            return Ok(last);
        }

        let dt = elapsed_seconds / TIME_SCALE_DIVISOR;
        let drift = (self.rate - 0.5 * self.step_volatility.powi(2)) * dt;
        let diffusion = if self.step_volatility == 0.0 {
            0.0
        } else {
            let z: f64 = rng.sample(StandardNormal);
            self.step_volatility * z * dt.sqrt()
        };

        let next = last * (drift + diffusion).exp();
        if !(next.is_finite() && next > 0.0) {
            return Err(SimulationError::InvalidState(format!(
                "price step produced {next} from {last}"
            )));
        }
        Ok(next)
    }
}

/// One-shot GBM step
pub fn price_step<R: Rng + ?Sized>(
    elapsed_seconds: f64,
    last: f64,
    rate: f64,
    volatility: f64,
    rng: &mut R,
) -> SimulationResult<f64> {
    GbmStep::new(rate, volatility)?.step(elapsed_seconds, last, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_elapsed_returns_prior_price() {
        let mut rng = StdRng::seed_from_u64(42);
        for (rate, vol) in [(0.01, 0.2), (-0.5, 3.0), (0.0, 0.0)] {
            assert_eq!(price_step(0.0, 100.0, rate, vol, &mut rng).unwrap(), 100.0);
        }
    }

    #[test]
    fn test_zero_elapsed_consumes_no_randomness() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        price_step(0.0, 100.0, 0.01, 0.2, &mut rng1).unwrap();
        assert_eq!(rng1.r#gen::<u64>(), rng2.r#gen::<u64>());
    }

    #[test]
    fn test_zero_volatility_is_deterministic_growth() {
        let mut rng1 = StdRng::seed_from_u64(1);
        let mut rng2 = StdRng::seed_from_u64(2);
        let a = price_step(3600.0, 100.0, 0.05, 0.0, &mut rng1).unwrap();
        let b = price_step(3600.0, 100.0, 0.05, 0.0, &mut rng2).unwrap();
        assert_eq!(a, b);

        let dt = 3600.0 / TIME_SCALE_DIVISOR;
        assert_relative_eq!(a, 100.0 * (0.05 * dt).exp(), max_relative = 1e-15);
    }

    #[test]
    fn test_matches_closed_form() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut replay = StdRng::seed_from_u64(9);

        let next = price_step(2.5, 100.0, 0.01, 0.2, &mut rng).unwrap();

        let z: f64 = replay.sample(StandardNormal);
        let dt = 2.5 / (365.0 * 24.0);
        let vol = 0.2 / 252f64.sqrt();
        let expected = 100.0 * ((0.01 - 0.5 * vol * vol) * dt + vol * z * dt.sqrt()).exp();
        assert_relative_eq!(next, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_prices_stay_positive() {
        let mut rng = StdRng::seed_from_u64(42);
        let step = GbmStep::new(-0.5, 3.0).unwrap();
        let mut price = 100.0;
        for _ in 0..1000 {
            price = step.step(2.0, price, &mut rng).unwrap();
            assert!(price > 0.0);
        }
    }

    #[test]
    fn test_non_positive_prior_is_invalid_state() {
        let mut rng = StdRng::seed_from_u64(42);
        for last in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                price_step(1.0, last, 0.01, 0.2, &mut rng),
                Err(SimulationError::InvalidState(_))
            ));
        }
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            price_step(-1.0, 100.0, 0.01, 0.2, &mut rng),
            Err(SimulationError::InvalidParameter(_))
        ));
        assert!(GbmStep::new(0.01, -0.2).is_err());
        assert!(GbmStep::new(f64::INFINITY, 0.2).is_err());
    }
}
