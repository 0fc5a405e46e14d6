//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the leaderboard value engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod color;
pub mod format;
pub mod pitch;
pub mod shade;
pub mod value;

// Re-export commonly used types at the crate root
pub use color::Color;
pub use format::{format_field, FormatRule, NULL_PLACEHOLDER};
pub use pitch::{has_light_fill, pitch_color, pitch_label, series_colors};
pub use shade::{percentile_shade, CellShade, ColorScheme};
pub use value::{FieldValue, Row, PERCENTILE_SUFFIX};
