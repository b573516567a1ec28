use serde::{Deserialize, Serialize};

/// Market liquidity classification, ordered from most to least liquid
///
/// Serialized with the short labels used throughout configuration files
/// and rendered histories (`UH`, `H`, `M`, `L`, `UL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LiquidityClass {
    #[serde(rename = "UH")]
    UltraHigh,
    #[serde(rename = "H")]
    High,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Low,
    #[serde(rename = "UL")]
    UltraLow,
}

impl LiquidityClass {
    /// Number of classes
    pub const COUNT: usize = 5;

    /// All classes in matrix order (most liquid first)
    pub const ALL: [LiquidityClass; Self::COUNT] = [
        LiquidityClass::UltraHigh,
        LiquidityClass::High,
        LiquidityClass::Medium,
        LiquidityClass::Low,
        LiquidityClass::UltraLow,
    ];

    /// Row/column index of this class in a transition matrix
    pub fn index(&self) -> usize {
        match self {
            LiquidityClass::UltraHigh => 0,
            LiquidityClass::High => 1,
            LiquidityClass::Medium => 2,
            LiquidityClass::Low => 3,
            LiquidityClass::UltraLow => 4,
        }
    }

    /// Class at a matrix index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Liquidity score: 5 for the most liquid class down to 1 for the least
    pub fn score(&self) -> u8 {
        (Self::COUNT - self.index()) as u8
    }

    /// Reverse of [`LiquidityClass::score`]
    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            1..=5 => Self::from_index(Self::COUNT - score as usize),
            _ => None,
        }
    }

    /// Short label (`UH`, `H`, `M`, `L`, `UL`)
    pub fn label(&self) -> &'static str {
        match self {
            LiquidityClass::UltraHigh => "UH",
            LiquidityClass::High => "H",
            LiquidityClass::Medium => "M",
            LiquidityClass::Low => "L",
            LiquidityClass::UltraLow => "UL",
        }
    }

    /// Parse a short label; surrounding whitespace and case are ignored
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|class| class.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for LiquidityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
