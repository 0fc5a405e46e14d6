//! FILENAME: board-engine/src/view.rs
//! Display model - the render-ready output of the dashboard pipeline.
//!
//! PURPOSE: Everything the rendering layer needs for one table paint, fully
//! resolved: formatted cell text, CSS color strings, pagination counters.
//! The renderer applies these verbatim; it never re-derives formatting or
//! percentile shading on its own.

use engine::{format_field, percentile_shade, ColorScheme, FieldValue};
use serde::Serialize;

use crate::definition::{FieldDescriptor, SortState};

// ============================================================================
// CELLS
// ============================================================================

/// One fully-resolved table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayCell {
    /// Formatted text, placeholder included for missing values.
    pub text: String,
    /// CSS background color, present only when percentile shading applies.
    pub background: Option<String>,
    /// CSS text color paired with `background`.
    pub text_color: Option<String>,
    /// Percentile behind the shading, surfaced for tooltips.
    pub percentile: Option<f64>,
    /// True when the underlying value was missing.
    pub is_null: bool,
}

impl DisplayCell {
    /// Unshaded cell with literal text (rank numbers, compare placeholders).
    pub fn plain(text: impl Into<String>) -> Self {
        DisplayCell {
            text: text.into(),
            background: None,
            text_color: None,
            percentile: None,
            is_null: false,
        }
    }

    /// Data cell: formats the value by the column's rule and, when a
    /// percentile is supplied, attaches the scheme's shading colors.
    pub fn from_field(
        value: Option<&FieldValue>,
        column: &FieldDescriptor,
        percentile: Option<f64>,
        scheme: ColorScheme,
    ) -> Self {
        let is_null = value.map(FieldValue::is_empty).unwrap_or(true);
        let text = format_field(value, column.format);

        let (background, text_color) = match percentile {
            Some(pctl) => {
                let shade = percentile_shade(pctl, scheme);
                (Some(shade.background.to_css()), Some(shade.text.to_css()))
            }
            None => (None, None),
        };

        DisplayCell {
            text,
            background,
            text_color,
            percentile,
            is_null,
        }
    }
}

// ============================================================================
// ROWS AND MODEL
// ============================================================================

/// One rendered row: cells in visible-column order plus row-level flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub cells: Vec<DisplayCell>,
    /// Entity name, the compare-selection and side-panel key.
    pub name: String,
    /// Synthetic league-average row: no shading, no compare checkbox.
    pub is_aggregate: bool,
    pub compare_selected: bool,
}

/// The sole artifact the rendering layer consumes per repaint.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayModel {
    /// Rows of the current page, in final sorted order.
    pub page_rows: Vec<DisplayRow>,
    /// Filtered row count before pagination.
    pub total_row_count: usize,
    pub total_pages: usize,
    /// Clamped page index, 1-based.
    pub current_page: usize,
    pub visible_columns: Vec<&'static FieldDescriptor>,
    pub sort: SortState,
    /// League-average row, present only when enabled and the page is
    /// non-empty.
    pub aggregate_row: Option<DisplayRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{columns_for, find_column, BoardKind};

    #[test]
    fn test_plain_cell_has_no_shading() {
        let cell = DisplayCell::plain("17");
        assert_eq!(cell.text, "17");
        assert!(cell.background.is_none());
        assert!(!cell.is_null);
    }

    #[test]
    fn test_data_cell_formats_and_shades() {
        let velocity = find_column(columns_for(BoardKind::Pitch), "velocity").unwrap();
        let value = FieldValue::Number(97.34);
        let cell =
            DisplayCell::from_field(Some(&value), velocity, Some(92.0), ColorScheme::Light);

        assert_eq!(cell.text, "97.3");
        assert_eq!(cell.percentile, Some(92.0));
        assert!(cell.background.is_some());
        // Reddish background in the upper tail, light text.
        assert_eq!(cell.text_color.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_missing_value_renders_placeholder_without_shading() {
        let spin = find_column(columns_for(BoardKind::Pitch), "spinRate").unwrap();
        let cell = DisplayCell::from_field(None, spin, None, ColorScheme::Dark);

        assert_eq!(cell.text, "--");
        assert!(cell.is_null);
        assert!(cell.background.is_none());
        assert!(cell.text_color.is_none());
    }
}
