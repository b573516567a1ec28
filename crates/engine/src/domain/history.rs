//! Append-only tick history

use serde::Serialize;
use ticksim_core::{FieldValue, TICK_COLUMNS, TickRecord, Timestamp};
use ticksim_ports::{SimulationError, SimulationResult};

/// Ordered, append-only table of tick records
///
/// Insertion order is chronological order. Records can be read but never
/// modified or removed; only the engine appends to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TickHistory {
    records: Vec<TickRecord>,
}

impl TickHistory {
    /// Start a history from its initial record
    pub(crate) fn new(initial: TickRecord) -> Self {
        Self {
            records: vec![initial],
        }
    }

    pub(crate) fn push(&mut self, record: TickRecord) {
        debug_assert!(
            self.records
                .last()
                .is_none_or(|prev| prev.timestamp <= record.timestamp),
            "history must stay in chronological order"
        );
        self.records.push(record);
    }

    pub fn records(&self) -> &[TickRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TickRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: a history holds at least its initial record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TickRecord> {
        self.records.get(index)
    }

    pub fn first(&self) -> &TickRecord {
        &self.records[0]
    }

    pub fn latest(&self) -> &TickRecord {
        &self.records[self.records.len() - 1]
    }

    /// Number of ticks generated after the initial record
    pub fn tick_count(&self) -> usize {
        self.records.len() - 1
    }

    /// Column names in table order
    pub fn columns(&self) -> &'static [&'static str] {
        &TICK_COLUMNS
    }

    /// One column of the table, top to bottom
    pub fn column(&self, name: &str) -> SimulationResult<Vec<FieldValue>> {
        if !TICK_COLUMNS.contains(&name) {
            return Err(SimulationError::MissingAttribute(name.to_string()));
        }
        self.records
            .iter()
            .map(|record| {
                record
                    .field(name)
                    .ok_or_else(|| SimulationError::MissingAttribute(name.to_string()))
            })
            .collect()
    }

    pub fn timestamps(&self) -> Vec<Timestamp> {
        self.records.iter().map(|r| r.timestamp).collect()
    }
}

impl<'a> IntoIterator for &'a TickHistory {
    type Item = &'a TickRecord;
    type IntoIter = std::slice::Iter<'a, TickRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use ticksim_core::{InstrumentId, LiquidityClass};

    fn record(seconds: i64, last: f64) -> TickRecord {
        TickRecord::new(
            InstrumentId::new("ALEX"),
            Utc.with_ymd_and_hms(2018, 12, 27, 9, 0, 0).unwrap() + Duration::seconds(seconds),
            None,
            None,
            last,
            LiquidityClass::Medium,
        )
    }

    #[test]
    fn test_starts_with_initial_record() {
        let history = TickHistory::new(record(0, 100.0));
        assert_eq!(history.len(), 1);
        assert_eq!(history.tick_count(), 0);
        assert!(!history.is_empty());
        assert_eq!(history.first(), history.latest());
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut history = TickHistory::new(record(0, 100.0));
        history.push(record(1, 101.0));
        history.push(record(3, 99.0));
        assert_eq!(history.tick_count(), 2);
        assert_eq!(history.latest().last, 99.0);
        assert_eq!(history.get(1).unwrap().last, 101.0);
    }

    #[test]
    fn test_column_lookup() {
        let mut history = TickHistory::new(record(0, 100.0));
        history.push(record(1, 101.0));

        let last = history.column("last").unwrap();
        assert_eq!(last, vec![FieldValue::Price(100.0), FieldValue::Price(101.0)]);

        let scores = history.column("liquidity_score").unwrap();
        assert!(scores.iter().all(|v| *v == FieldValue::Score(3)));
    }

    #[test]
    fn test_unknown_column_is_missing_attribute() {
        let history = TickHistory::new(record(0, 100.0));
        assert_eq!(
            history.column("volume"),
            Err(SimulationError::MissingAttribute("volume".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_row_list() {
        let history = TickHistory::new(record(0, 100.0));
        let json = serde_json::to_value(&history).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["last"], 100.0);
    }
}
