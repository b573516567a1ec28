//! Bid/ask quote synthesis

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use ticksim_core::{LiquidityClass, Price};

use crate::domain::{QuoteModel, QuotePresence};

/// Quoted sides around the last price; `None` means no quote on that side
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quote {
    pub bid: Option<Price>,
    pub ask: Option<Price>,
}

impl Quote {
    pub fn is_two_sided(&self) -> bool {
        self.bid.is_some() && self.ask.is_some()
    }

    pub fn spread(&self) -> Option<Price> {
        Some(self.ask? - self.bid?)
    }
}

impl QuoteModel {
    /// Quote both sides symmetrically around `last`
    ///
    /// Classes with a presence threshold draw one standard normal per side,
    /// bid first, and withdraw the side unless the draw passes the threshold.
    pub fn quote<R: Rng + ?Sized>(&self, class: LiquidityClass, last: Price, rng: &mut R) -> Quote {
        let profile = self.profile(class);
        let half_spread = profile.spread_at(last) / 2.0;
        let bid = last - half_spread;
        let ask = last + half_spread;

        match profile.presence {
            QuotePresence::Always => Quote {
                bid: Some(bid),
                ask: Some(ask),
            },
            presence => {
                let bid_draw: f64 = rng.sample(StandardNormal);
                let ask_draw: f64 = rng.sample(StandardNormal);
                Quote {
                    bid: presence.quoted(bid_draw).then_some(bid),
                    ask: presence.quoted(ask_draw).then_some(ask),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_liquid_classes_always_two_sided() {
        let model = QuoteModel::reference();
        let mut rng = StdRng::seed_from_u64(42);
        for (class, pct) in [
            (LiquidityClass::UltraHigh, 0.0005),
            (LiquidityClass::High, 0.001),
            (LiquidityClass::Medium, 0.005),
        ] {
            for last in [100.0, 57.31, 12345.678] {
                let quote = model.quote(class, last, &mut rng);
                assert!(quote.is_two_sided());
                assert_relative_eq!(quote.spread().unwrap(), last * pct, max_relative = 1e-9);
                assert_relative_eq!(
                    (quote.bid.unwrap() + quote.ask.unwrap()) / 2.0,
                    last,
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_liquid_classes_consume_no_randomness() {
        let model = QuoteModel::reference();
        let mut rng1 = StdRng::seed_from_u64(5);
        let mut rng2 = StdRng::seed_from_u64(5);
        model.quote(LiquidityClass::Medium, 100.0, &mut rng1);
        assert_eq!(rng1.r#gen::<u64>(), rng2.r#gen::<u64>());
    }

    #[test]
    fn test_absent_side_is_none_not_zero() {
        let model = QuoteModel::reference();
        let mut rng = StdRng::seed_from_u64(42);
        let mut saw_missing = false;
        for _ in 0..200 {
            let quote = model.quote(LiquidityClass::UltraLow, 100.0, &mut rng);
            for side in [quote.bid, quote.ask] {
                match side {
                    Some(p) => assert!(p > 0.0),
                    None => saw_missing = true,
                }
            }
        }
        assert!(saw_missing);
    }

    #[test]
    fn test_low_class_uses_one_percent_spread() {
        let model = QuoteModel::reference();
        let mut rng = StdRng::seed_from_u64(42);
        let quote = (0..1000)
            .map(|_| model.quote(LiquidityClass::Low, 200.0, &mut rng))
            .find(Quote::is_two_sided)
            .unwrap();
        assert_relative_eq!(quote.spread().unwrap(), 2.0, max_relative = 1e-9);
    }
}
