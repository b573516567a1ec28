use serde::{Serialize, Serializer};
use serde_json::{Value, json};

/// Scatter chart layout
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub hovermode: String,
}

impl Serialize for ChartLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl ChartLayout {
    /// Scatter layout with nearest-point hover
    pub fn scatter(
        title: impl Into<String>,
        x_axis: impl Into<String>,
        y_axis: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_axis: x_axis.into(),
            y_axis: y_axis.into(),
            hovermode: "closest".to_string(),
        }
    }

    /// Layout for a price history chart
    pub fn price_history(ticker: &str) -> Self {
        Self::scatter(ticker, "Time", "Price")
    }

    pub fn to_json(&self) -> Value {
        json!({
            "title": self.title,
            "xaxis": { "title": self.x_axis },
            "yaxis": { "title": self.y_axis },
            "hovermode": self.hovermode,
        })
    }
}
