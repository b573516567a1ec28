//! Gamma-distributed inter-tick timer

use rand::Rng;
use rand_distr::{Distribution, Gamma};
use ticksim_ports::{SimulationError, SimulationResult};

/// Consecutive zero draws tolerated before the shape is declared unusable
pub const MAX_ZERO_DRAWS: usize = 64;

/// Draws the time between successive ticks, in seconds
///
/// Durations follow Gamma(alpha, theta) with mean `alpha * theta`.
/// There is no upper bound: a heavy draw simply means a sparse stretch.
#[derive(Debug, Clone, Copy)]
pub struct InterTickTimer {
    alpha: f64,
    theta: f64,
    gamma: Gamma<f64>,
}

impl InterTickTimer {
    /// Create a timer with shape `alpha` and scale `theta` (both > 0)
    pub fn new(alpha: f64, theta: f64) -> SimulationResult<Self> {
        if !(alpha.is_finite() && alpha > 0.0 && theta.is_finite() && theta > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "gamma timer needs alpha > 0 and theta > 0, got alpha={alpha}, theta={theta}"
            )));
        }
        let gamma = Gamma::new(alpha, theta).map_err(|e| {
            SimulationError::InvalidParameter(format!("gamma timer: {e}"))
        })?;
        Ok(Self {
            alpha,
            theta,
            gamma,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Expected inter-tick time in seconds
    pub fn mean(&self) -> f64 {
        self.alpha * self.theta
    }

    /// Draw a strictly positive duration in seconds
    ///
    /// Tiny shapes can underflow to exactly zero; such draws are repeated,
    /// and a shape that keeps underflowing is rejected.
    pub fn next_delta<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationResult<f64> {
        for _ in 0..MAX_ZERO_DRAWS {
            let delta = self.gamma.sample(rng);
            if delta > 0.0 {
                return Ok(delta);
            }
        }
        Err(SimulationError::InvalidParameter(format!(
            "gamma timer with alpha={} underflowed to zero {} times in a row",
            self.alpha, MAX_ZERO_DRAWS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_draws_strictly_positive() {
        let mut rng = StdRng::seed_from_u64(42);
        for (alpha, theta) in [(1.0, 2.0), (0.05, 0.1), (0.5, 0.001), (7.5, 3.25)] {
            let timer = InterTickTimer::new(alpha, theta).unwrap();
            for _ in 0..5000 {
                assert!(timer.next_delta(&mut rng).unwrap() > 0.0);
            }
        }
    }

    #[test]
    fn test_sample_mean_near_alpha_theta() {
        let mut rng = StdRng::seed_from_u64(7);
        let timer = InterTickTimer::new(1.0, 2.0).unwrap();
        let n = 20_000;
        let mean = (0..n).map(|_| timer.next_delta(&mut rng).unwrap()).sum::<f64>() / n as f64;
        assert!((mean - timer.mean()).abs() < 0.1, "mean {mean}");
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        for (alpha, theta) in [(0.0, 1.0), (1.0, 0.0), (-1.0, 2.0), (1.0, f64::NAN)] {
            assert!(matches!(
                InterTickTimer::new(alpha, theta),
                Err(SimulationError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let timer = InterTickTimer::new(1.0, 2.0).unwrap();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(timer.next_delta(&mut rng1), timer.next_delta(&mut rng2));
        }
    }

    #[test]
    fn test_underflowing_shape_is_rejected() {
        let timer = InterTickTimer::new(1e-20, 2.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            timer.next_delta(&mut rng),
            Err(SimulationError::InvalidParameter(_))
        ));
    }
}
