//! Depth legend construction
//!
//! The legend is derived from the same classifier the markers use: each
//! entry samples `classify(breakpoint + 1)` so the swatch lands strictly
//! inside its bucket rather than on the boundary shared with the previous
//! one. `LEGEND_BREAKPOINTS` and [`crate::style::depth::DEPTH_THRESHOLDS`]
//! must describe the same intervals.

use crate::style::depth::{classify, DepthColor};
use crate::ui::control::ControlPosition;

/// Lower bounds of the legend buckets, ascending.
pub const LEGEND_BREAKPOINTS: [f64; 6] = [-10.0, 10.0, 30.0, 50.0, 70.0, 90.0];

/// One legend row: a depth interval and its swatch color
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub lower: f64,
    pub upper: Option<f64>,
    pub color: DepthColor,
}

impl LegendEntry {
    /// Human-readable interval label, `"10–30"` or `"90+"` for the
    /// open-ended last bucket.
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{}–{}", self.lower, upper),
            None => format!("{}+", self.lower),
        }
    }
}

/// Builds the ordered legend entries for the given breakpoints.
pub fn build_legend(breakpoints: &[f64]) -> Vec<LegendEntry> {
    breakpoints
        .iter()
        .enumerate()
        .map(|(i, &lower)| LegendEntry {
            lower,
            upper: breakpoints.get(i + 1).copied(),
            color: classify(lower + 1.0),
        })
        .collect()
}

/// The renderable legend control
#[derive(Debug, Clone, PartialEq)]
pub struct LegendControl {
    pub title: String,
    pub position: ControlPosition,
    pub entries: Vec<LegendEntry>,
}

impl LegendControl {
    /// The standard depth legend, anchored bottom right.
    pub fn depth() -> Self {
        Self {
            title: "Depth".to_string(),
            position: ControlPosition::BottomRight,
            entries: build_legend(&LEGEND_BREAKPOINTS),
        }
    }
}
