//! Figure Model
//!
//! A serializable chart description in the Plotly figure format
//! (`{data: [...traces], layout: {...}}`). The page hands these straight to
//! `Plotly.react`.

use serde::Serialize;

/// Default qualitative palette for series colors
pub const SERIES_COLORS: [&str; 10] = [
    "#636EFA", // Blue
    "#EF553B", // Red
    "#00CC96", // Green
    "#AB63FA", // Purple
    "#FFA15A", // Orange
    "#19D3F3", // Cyan
    "#FF6692", // Pink
    "#B6E880", // Lime
    "#FF97FF", // Magenta
    "#FECB52", // Yellow
];

/// Color for the n-th series, cycling through the palette
pub fn series_color(idx: usize) -> &'static str {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// A complete chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    /// Total number of plotted points (scatter) or slices (pie)
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::len).sum()
    }
}

/// One data series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Scatter(ScatterTrace),
}

impl Trace {
    pub fn len(&self) -> usize {
        match self {
            Trace::Pie(pie) => pie.values.len(),
            Trace::Scatter(scatter) => scatter.x.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Pie slices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub marker: PieMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieMarker {
    pub colors: Vec<String>,
}

/// Scatter points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<u8>,
    /// Launch site of each point, shown on hover
    pub customdata: Vec<String>,
    pub hovertemplate: String,
    pub marker: ScatterMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterMarker {
    pub color: String,
}

/// Chart layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl Layout {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
            xaxis: None,
            yaxis: None,
            legend: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Axis settings; `tickvals`/`ticktext` render numeric values as categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<String>>,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title::new(text),
            tickmode: None,
            tickvals: None,
            ticktext: None,
        }
    }

    /// Show the given values with fixed labels
    pub fn categorical(mut self, ticks: &[(f64, &str)]) -> Self {
        self.tickmode = Some("array".to_string());
        self.tickvals = Some(ticks.iter().map(|(v, _)| *v).collect());
        self.ticktext = Some(ticks.iter().map(|(_, t)| t.to_string()).collect());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_tagged_with_type() {
        let fig = Figure::new(Layout::titled("t")).trace(Trace::Pie(PieTrace {
            labels: vec!["Success".to_string()],
            values: vec![3],
            marker: PieMarker {
                colors: vec![series_color(0).to_string()],
            },
        }));

        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["data"][0]["type"], "pie");
        assert_eq!(json["data"][0]["values"][0], 3);
        assert_eq!(json["layout"]["title"]["text"], "t");
        assert!(json["layout"].get("xaxis").is_none());
    }

    #[test]
    fn test_categorical_axis() {
        let axis = Axis::titled("class").categorical(&[(0.0, "Failure"), (1.0, "Success")]);

        assert_eq!(axis.tickmode.as_deref(), Some("array"));
        assert_eq!(axis.tickvals, Some(vec![0.0, 1.0]));
        assert_eq!(
            axis.ticktext,
            Some(vec!["Failure".to_string(), "Success".to_string()])
        );
    }

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), series_color(SERIES_COLORS.len()));
    }
}
