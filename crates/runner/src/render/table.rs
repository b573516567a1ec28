//! Plain-text table output

use std::io::Write;

use ticksim_core::{InstrumentId, TICK_COLUMNS, TickRecord};
use ticksim_ports::{HistoryRenderer, RenderError, RenderResult, RenderedArtifact};

/// Formats a history as a right-aligned text table, one row per record
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    /// Show at most this many rows, eliding the middle
    max_rows: Option<usize>,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_rows(max_rows: usize) -> Self {
        Self {
            max_rows: Some(max_rows),
        }
    }

    /// Write the table to `out`
    pub fn write_table<W: Write>(&self, records: &[TickRecord], out: &mut W) -> RenderResult<()> {
        let cells: Vec<Vec<String>> = records
            .iter()
            .map(|record| {
                TICK_COLUMNS
                    .iter()
                    .map(|column| {
                        record
                            .field(column)
                            .map(|value| value.to_string())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let (head, tail) = match self.max_rows {
            Some(max) if cells.len() > max => {
                let head = max.div_ceil(2);
                (&cells[..head], &cells[cells.len() - (max - head)..])
            }
            _ => (&cells[..], &cells[cells.len()..]),
        };
        let elided = cells.len() - head.len() - tail.len();

        let index_width = records.len().saturating_sub(1).to_string().len();
        let mut widths: Vec<usize> = TICK_COLUMNS.iter().map(|c| c.len()).collect();
        for row in head.iter().chain(tail) {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        write!(out, "{:>index_width$}", "")?;
        for (column, width) in TICK_COLUMNS.iter().zip(&widths) {
            write!(out, "  {:>width$}", column)?;
        }
        writeln!(out)?;

        let tail_offset = cells.len() - tail.len();
        for (i, row) in head.iter().enumerate() {
            write_row(out, i, row, index_width, &widths)?;
        }
        if elided > 0 {
            writeln!(out, "... ({} rows)", elided)?;
        }
        for (i, row) in tail.iter().enumerate() {
            write_row(out, tail_offset + i, row, index_width, &widths)?;
        }

        writeln!(out)?;
        writeln!(out, "[{} rows x {} columns]", records.len(), TICK_COLUMNS.len())?;
        Ok(())
    }
}

fn write_row<W: Write>(
    out: &mut W,
    index: usize,
    row: &[String],
    index_width: usize,
    widths: &[usize],
) -> std::io::Result<()> {
    write!(out, "{:<index_width$}", index)?;
    for (cell, width) in row.iter().zip(widths) {
        write!(out, "  {:>width$}", cell)?;
    }
    writeln!(out)
}

impl HistoryRenderer for TableRenderer {
    fn render(
        &self,
        instrument_id: &InstrumentId,
        records: &[TickRecord],
    ) -> RenderResult<RenderedArtifact> {
        if records.is_empty() {
            return Err(RenderError::EmptyHistory(instrument_id.to_string()));
        }
        let mut buf = Vec::new();
        self.write_table(records, &mut buf)?;
        let text = String::from_utf8(buf).map_err(|e| RenderError::Serialization(e.to_string()))?;
        Ok(RenderedArtifact::Text(text))
    }

    fn name(&self) -> &str {
        "table"
    }
}
