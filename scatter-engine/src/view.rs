//! FILENAME: scatter-engine/src/view.rs
//! Renderable scatter series for the chart layer.
//!
//! Colors arrive as CSS strings, labels fully composed; the renderer
//! plots these verbatim.

use serde::{Deserialize, Serialize};

use crate::ellipse::{Ellipse, Point};

// ============================================================================
// MARKERS
// ============================================================================

/// Point marker shapes cycled across compared entities so overlapping
/// clouds stay tellable apart. Serialized names match common chart
/// libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerStyle {
    Circle,
    Triangle,
    Rect,
    RectRot,
}

const MARKER_CYCLE: [MarkerStyle; 4] = [
    MarkerStyle::Circle,
    MarkerStyle::Triangle,
    MarkerStyle::Rect,
    MarkerStyle::RectRot,
];

impl MarkerStyle {
    /// Marker for the n-th compared entity, wrapping around the cycle.
    pub fn for_index(index: usize) -> MarkerStyle {
        MARKER_CYCLE[index % MARKER_CYCLE.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            MarkerStyle::Circle => "circle",
            MarkerStyle::Triangle => "triangle",
            MarkerStyle::Rect => "rect",
            MarkerStyle::RectRot => "rectRot",
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        MarkerStyle::Circle
    }
}

// ============================================================================
// SERIES
// ============================================================================

/// One pitch type's cloud on the single-pitcher chart, with its fitted
/// ellipse and the league reference point when available.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlaySeries {
    pub pitch_type: String,
    /// Legend label, "CODE - Full Name".
    pub label: String,
    pub points: Vec<Point>,
    /// CSS fill color for markers.
    pub fill: String,
    /// CSS border color; also the ellipse stroke.
    pub border: String,
    /// Absent when the cloud has too few points.
    pub ellipse: Option<Ellipse>,
    /// League-wide mean on the same axes.
    pub league_average: Option<Point>,
}

/// One (entity, pitch type) cloud on the comparison chart. Compare mode
/// draws raw points only, never ellipses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareSeries {
    pub entity: String,
    pub pitch_type: String,
    /// Legend label, "Entity - CODE".
    pub label: String,
    pub points: Vec<Point>,
    pub fill: String,
    pub border: String,
    /// Shared by all of one entity's series.
    pub marker: MarkerStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_cycle_wraps() {
        assert_eq!(MarkerStyle::for_index(0), MarkerStyle::Circle);
        assert_eq!(MarkerStyle::for_index(3), MarkerStyle::RectRot);
        assert_eq!(MarkerStyle::for_index(4), MarkerStyle::Circle);
        assert_eq!(MarkerStyle::for_index(6), MarkerStyle::Rect);
    }

    #[test]
    fn test_marker_serializes_chart_names() {
        assert_eq!(
            serde_json::to_string(&MarkerStyle::RectRot).unwrap(),
            "\"rectRot\""
        );
        assert_eq!(MarkerStyle::Triangle.name(), "triangle");
    }
}
