//! Interactive HTML chart output

use std::path::PathBuf;

use serde_json::{Value, json};
use ticksim_core::{InstrumentId, Price, TickRecord};
use ticksim_ports::{HistoryRenderer, RenderError, RenderResult, RenderedArtifact};

use super::ChartLayout;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Writes `<ticker>.html` with a bid/ask/last scatter chart
#[derive(Debug, Clone)]
pub struct HtmlChartRenderer {
    output_dir: PathBuf,
}

impl HtmlChartRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path the chart for `instrument_id` is written to
    pub fn output_path(&self, instrument_id: &InstrumentId) -> PathBuf {
        self.output_dir.join(format!("{}.html", instrument_id))
    }

    /// Build the complete HTML document
    pub fn document(
        &self,
        instrument_id: &InstrumentId,
        records: &[TickRecord],
    ) -> RenderResult<String> {
        if records.is_empty() {
            return Err(RenderError::EmptyHistory(instrument_id.to_string()));
        }

        let times: Vec<String> = records.iter().map(|r| r.timestamp.to_rfc3339()).collect();
        let traces = json!([
            trace("bid", &times, records.iter().map(|r| r.bid)),
            trace("ask", &times, records.iter().map(|r| r.ask)),
            trace("last", &times, records.iter().map(|r| Some(r.last))),
        ]);
        let layout = ChartLayout::price_history(instrument_id.as_str()).to_json();

        let traces = script_safe(&traces)?;
        let layout = script_safe(&layout)?;
        let title = escape_html(instrument_id.as_str());

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
</head>
<body>
<div id="chart" style="width:100%;height:90vh;"></div>
<script>
Plotly.newPlot("chart", {traces}, {layout});
</script>
</body>
</html>
"#
        ))
    }
}

impl HistoryRenderer for HtmlChartRenderer {
    fn render(
        &self,
        instrument_id: &InstrumentId,
        records: &[TickRecord],
    ) -> RenderResult<RenderedArtifact> {
        let document = self.document(instrument_id, records)?;
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_path(instrument_id);
        std::fs::write(&path, document)?;

        log::info!("Wrote chart for {} to {}", instrument_id, path.display());
        Ok(RenderedArtifact::File(path))
    }

    fn name(&self) -> &str {
        "html-chart"
    }
}

/// Scatter trace; absent quotes become `null` gaps
fn trace(name: &str, times: &[String], values: impl Iterator<Item = Option<Price>>) -> Value {
    let y: Vec<Option<Price>> = values.collect();
    json!({
        "type": "scatter",
        "mode": "lines",
        "name": name,
        "x": times,
        "y": y,
        "connectgaps": false,
    })
}

/// Serialize for embedding inside a `<script>` block
fn script_safe(value: &Value) -> RenderResult<String> {
    let json =
        serde_json::to_string(value).map_err(|e| RenderError::Serialization(e.to_string()))?;
    Ok(json.replace("</", "<\\/"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
