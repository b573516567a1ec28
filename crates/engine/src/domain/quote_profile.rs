//! Per-class quoting rules
//!
//! Each liquidity class has a percentage spread and a rule deciding whether
//! a side is quoted at all.

use serde::{Deserialize, Serialize};
use ticksim_core::LiquidityClass;

/// Whether a side of the book gets a quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotePresence {
    /// Both sides are always quoted
    Always,
    /// Each side is quoted independently when a standard normal draw
    /// exceeds the threshold
    NormalAbove(f64),
    /// Each side is quoted independently when a standard normal draw
    /// falls below the threshold
    NormalBelow(f64),
}

impl QuotePresence {
    /// Whether a side with standard normal draw `z` is quoted
    pub fn quoted(&self, z: f64) -> bool {
        match *self {
            QuotePresence::Always => true,
            QuotePresence::NormalAbove(threshold) => z > threshold,
            QuotePresence::NormalBelow(threshold) => z < threshold,
        }
    }
}

/// Quoting rule for one liquidity class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteProfile {
    /// Full spread as a fraction of the last price (0.0005 = 0.05%)
    pub spread_pct: f64,
    pub presence: QuotePresence,
}

impl QuoteProfile {
    pub const fn always(spread_pct: f64) -> Self {
        Self {
            spread_pct,
            presence: QuotePresence::Always,
        }
    }

    pub const fn normal_above(spread_pct: f64, threshold: f64) -> Self {
        Self {
            spread_pct,
            presence: QuotePresence::NormalAbove(threshold),
        }
    }

    pub const fn normal_below(spread_pct: f64, threshold: f64) -> Self {
        Self {
            spread_pct,
            presence: QuotePresence::NormalBelow(threshold),
        }
    }

    /// Full spread at the given last price
    pub fn spread_at(&self, last: f64) -> f64 {
        last * self.spread_pct
    }
}

/// Quoting rules for all five classes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteModel {
    profiles: [QuoteProfile; LiquidityClass::COUNT],
}

impl QuoteModel {
    /// Reference quoting rules
    ///
    /// A low-liquidity side is quoted about 58% of the time (Z < 0.2), an
    /// ultra-low side about 24% (Z > 0.7). The ultra-low class keeps the
    /// tight 0.05% spread.
    pub const REFERENCE: [QuoteProfile; LiquidityClass::COUNT] = [
        QuoteProfile::always(0.0005),
        QuoteProfile::always(0.001),
        QuoteProfile::always(0.005),
        QuoteProfile::normal_below(0.01, 0.2),
        QuoteProfile::normal_above(0.0005, 0.7),
    ];

    pub fn new(profiles: [QuoteProfile; LiquidityClass::COUNT]) -> Self {
        Self { profiles }
    }

    pub fn reference() -> Self {
        Self::new(Self::REFERENCE)
    }

    pub fn profile(&self, class: LiquidityClass) -> &QuoteProfile {
        &self.profiles[class.index()]
    }
}

impl Default for QuoteModel {
    fn default() -> Self {
        Self::reference()
    }
}
