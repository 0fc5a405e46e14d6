//! FILENAME: scatter-engine/src/engine.rs
//! Scatter Engine - groups raw pitch samples into chart series.
//!
//! PURPOSE: Turn one pitcher's per-pitch samples into overlay series
//! (points + ellipse + league reference), and a compare selection into
//! multi-entity series with distinct markers.

use engine::{pitch_label, series_colors, Row};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::ellipse::{confidence_ellipse, Point};
use crate::view::{CompareSeries, MarkerStyle, OverlaySeries};

// ============================================================================
// SAMPLES AND AXES
// ============================================================================

/// One pitch as recorded in the per-entity detail feed. Break values are
/// always present; velocity and release coordinates are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchSample {
    #[serde(rename = "pt")]
    pub pitch_type: String,
    #[serde(rename = "ivb")]
    pub ind_vert_brk: f64,
    #[serde(rename = "hb")]
    pub horz_brk: f64,
    #[serde(rename = "v", default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    #[serde(rename = "rx", default, skip_serializing_if = "Option::is_none")]
    pub rel_side: Option<f64>,
    #[serde(rename = "rz", default, skip_serializing_if = "Option::is_none")]
    pub rel_height: Option<f64>,
}

/// Per-entity sample lists, keyed by entity name.
pub type DetailMap = FxHashMap<String, Vec<PitchSample>>;

/// Which pair of sample coordinates a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScatterAxes {
    /// x = horizontal break, y = induced vertical break.
    Movement,
    /// x = release side, y = release height.
    Release,
}

impl ScatterAxes {
    /// Projects a sample onto these axes; `None` when a coordinate is
    /// missing (release data is not recorded for every pitch).
    pub fn project(&self, sample: &PitchSample) -> Option<Point> {
        match self {
            ScatterAxes::Movement => Some(Point::new(sample.horz_brk, sample.ind_vert_brk)),
            ScatterAxes::Release => match (sample.rel_side, sample.rel_height) {
                (Some(x), Some(y)) => Some(Point::new(x, y)),
                _ => None,
            },
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            ScatterAxes::Movement => "Horizontal Break (in.)",
            ScatterAxes::Release => "Release Side (ft.)",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            ScatterAxes::Movement => "Induced Vertical Break (in.)",
            ScatterAxes::Release => "Release Height (ft.)",
        }
    }

    /// Leaderboard metric keys matching these axes, used to read league
    /// reference points out of metadata rows.
    pub fn x_metric(&self) -> &'static str {
        match self {
            ScatterAxes::Movement => "horzBrk",
            ScatterAxes::Release => "relPosX",
        }
    }

    pub fn y_metric(&self) -> &'static str {
        match self {
            ScatterAxes::Movement => "indVertBrk",
            ScatterAxes::Release => "relPosZ",
        }
    }
}

impl Default for ScatterAxes {
    fn default() -> Self {
        ScatterAxes::Movement
    }
}

// ============================================================================
// SERIES BUILDERS
// ============================================================================

fn group_points(samples: &[PitchSample], axes: ScatterAxes) -> Vec<(String, Vec<Point>)> {
    let mut groups: FxHashMap<&str, Vec<Point>> = FxHashMap::default();
    for sample in samples {
        if let Some(point) = axes.project(sample) {
            groups
                .entry(sample.pitch_type.as_str())
                .or_default()
                .push(point);
        }
    }
    let mut grouped: Vec<(String, Vec<Point>)> = groups
        .into_iter()
        .map(|(pt, points)| (pt.to_string(), points))
        .collect();
    // Legend order is alphabetical by pitch code, independent of sample
    // order in the feed.
    grouped.sort_by(|a, b| a.0.cmp(&b.0));
    grouped
}

/// Builds one pitcher's overlay: per pitch type a point cloud, its fitted
/// ellipse, and the league average on the same axes when the metadata
/// carries both coordinates. Pitch types with no projectable samples
/// produce no series.
pub fn build_overlays(
    samples: &[PitchSample],
    axes: ScatterAxes,
    league_averages: &FxHashMap<String, Row>,
) -> Vec<OverlaySeries> {
    group_points(samples, axes)
        .into_iter()
        .map(|(pitch_type, points)| {
            let (fill, border) = series_colors(&pitch_type);
            let ellipse = confidence_ellipse(&points);
            let league_average = league_averages.get(&pitch_type).and_then(|row| {
                let x = row.number(axes.x_metric())?;
                let y = row.number(axes.y_metric())?;
                Some(Point::new(x, y))
            });
            OverlaySeries {
                label: format!("{} - {}", pitch_type, pitch_label(&pitch_type)),
                pitch_type,
                points,
                fill: fill.to_css(),
                border: border.to_css(),
                ellipse,
                league_average,
            }
        })
        .collect()
}

/// Builds the comparison chart series for the selected entities, in
/// selection order. Each entity keeps one marker shape across all of its
/// pitch types; marker assignment follows the selection index even when
/// an entity has no detail data. Compare mode never fits ellipses.
pub fn build_compare(
    names: &[String],
    details: &DetailMap,
    axes: ScatterAxes,
) -> Vec<CompareSeries> {
    let mut series = Vec::new();
    for (index, name) in names.iter().enumerate() {
        let samples = match details.get(name) {
            Some(samples) => samples,
            None => continue,
        };
        let marker = MarkerStyle::for_index(index);
        for (pitch_type, points) in group_points(samples, axes) {
            let (fill, border) = series_colors(&pitch_type);
            series.push(CompareSeries {
                entity: name.clone(),
                label: format!("{} - {}", name, pitch_type),
                pitch_type,
                points,
                fill: fill.to_css(),
                border: border.to_css(),
                marker,
            });
        }
    }
    series
}
