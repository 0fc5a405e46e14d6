//! FILENAME: scatter-engine/src/lib.rs
//! Scatter/ellipse subsystem for the dashboard.
//!
//! This crate turns per-pitch sample feeds into renderable chart series:
//! point clouds grouped by pitch type, distribution ellipses, league
//! reference points, and multi-entity comparison overlays. It depends on
//! `engine` for shared color and row types.
//!
//! Layers:
//! - `ellipse`: Analytic 2x2 covariance ellipse fitting
//! - `view`: Renderable series for the chart layer (WHAT we display)
//! - `engine`: Sample grouping and series building (HOW we compute)

pub mod ellipse;
pub mod engine;
pub mod view;

pub use ellipse::{confidence_ellipse, Ellipse, Point, AXIS_SCALE, MIN_POINTS};
pub use self::engine::{build_compare, build_overlays, DetailMap, PitchSample, ScatterAxes};
pub use view::{CompareSeries, MarkerStyle, OverlaySeries};
