use serde::{Deserialize, Serialize};

use super::LiquidityClass;
use crate::instruments::InstrumentId;
use crate::values::{Price, Timestamp};

/// Column names of a tick history, in table order
pub const TICK_COLUMNS: [&str; 7] = [
    "ticker",
    "time",
    "bid",
    "ask",
    "last",
    "liquidity",
    "liquidity_score",
];

/// One row of a simulated history
///
/// Records are immutable once built; a history only ever appends them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    #[serde(rename = "ticker")]
    pub instrument_id: InstrumentId,
    #[serde(rename = "time")]
    pub timestamp: Timestamp,
    /// Best bid, `None` when no bid is quoted
    pub bid: Option<Price>,
    /// Best ask, `None` when no ask is quoted
    pub ask: Option<Price>,
    /// Last traded price
    pub last: Price,
    #[serde(rename = "liquidity")]
    pub liquidity_class: LiquidityClass,
    pub liquidity_score: u8,
}

/// A single cell of a tick history table
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Time(Timestamp),
    Price(Price),
    Quote(Option<Price>),
    Class(LiquidityClass),
    Score(u8),
}

impl TickRecord {
    /// Build a record; the score is always derived from the class
    pub fn new(
        instrument_id: InstrumentId,
        timestamp: Timestamp,
        bid: Option<Price>,
        ask: Option<Price>,
        last: Price,
        liquidity_class: LiquidityClass,
    ) -> Self {
        Self {
            instrument_id,
            timestamp,
            bid,
            ask,
            last,
            liquidity_class,
            liquidity_score: liquidity_class.score(),
        }
    }

    /// Quoted spread, when both sides are present
    pub fn spread(&self) -> Option<Price> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Look up a column by name; `None` for names outside [`TICK_COLUMNS`]
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "ticker" => FieldValue::Text(self.instrument_id.to_string()),
            "time" => FieldValue::Time(self.timestamp),
            "bid" => FieldValue::Quote(self.bid),
            "ask" => FieldValue::Quote(self.ask),
            "last" => FieldValue::Price(self.last),
            "liquidity" => FieldValue::Class(self.liquidity_class),
            "liquidity_score" => FieldValue::Score(self.liquidity_score),
            _ => return None,
        };
        Some(value)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Time(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S%.6f")),
            FieldValue::Price(p) => write!(f, "{:.6}", p),
            FieldValue::Quote(Some(p)) => write!(f, "{:.6}", p),
            FieldValue::Quote(None) => f.write_str("None"),
            FieldValue::Class(c) => write!(f, "{}", c),
            FieldValue::Score(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample() -> TickRecord {
        TickRecord::new(
            InstrumentId::new("ALEX"),
            Utc.with_ymd_and_hms(2018, 12, 27, 9, 0, 0).unwrap(),
            Some(99.95),
            None,
            100.0,
            LiquidityClass::Low,
        )
    }

    #[test]
    fn test_score_follows_class() {
        assert_eq!(sample().liquidity_score, 2);
    }

    #[test]
    fn test_spread_requires_both_sides() {
        let mut record = sample();
        assert_eq!(record.spread(), None);
        record.ask = Some(100.05);
        assert!((record.spread().unwrap() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_every_column_resolves() {
        let record = sample();
        for column in TICK_COLUMNS {
            assert!(record.field(column).is_some(), "column {column} missing");
        }
        assert_eq!(record.field("volume"), None);
        assert_eq!(record.field("ask"), Some(FieldValue::Quote(None)));
    }

    #[test]
    fn test_display_absent_quote() {
        assert_eq!(FieldValue::Quote(None).to_string(), "None");
        assert_eq!(FieldValue::Class(LiquidityClass::UltraHigh).to_string(), "UH");
    }

    #[test]
    fn test_serialized_column_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        for column in TICK_COLUMNS {
            assert!(obj.contains_key(column), "json missing {column}");
        }
        assert!(obj["ask"].is_null());
    }
}
