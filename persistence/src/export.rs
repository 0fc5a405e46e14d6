//! FILENAME: persistence/src/export.rs
//! Tabular export of the filtered, sorted result set.
//!
//! PURPOSE: Turn rows and their column definitions into delimited text.
//! CSV is the download format: every non-empty cell is quoted so commas
//! and quotes in names survive a spreadsheet import. TSV is the
//! clipboard format: bare values, since spreadsheets split pasted text
//! on tabs without consulting quotes.
//!
//! Cells are formatted by the column's display rule, so an exported
//! velocity reads "94.2" exactly as it did on screen. Missing values
//! export as empty cells, not as the on-screen "--" placeholder.

use board_engine::FieldDescriptor;
use engine::{format_field, Row};

/// Comma-separated export with quoted headers and cells.
pub fn to_csv(rows: &[&Row], columns: &[&FieldDescriptor]) -> String {
    let header = columns
        .iter()
        .map(|col| quote(col.label))
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header);
    for row in rows {
        let cells = columns
            .iter()
            .map(|col| {
                if row.is_missing(col.key) {
                    String::new()
                } else {
                    quote(&format_field(row.get(col.key), col.format))
                }
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(cells);
    }
    lines.join("\n")
}

/// Tab-separated export for pasting into a spreadsheet.
pub fn to_tsv(rows: &[&Row], columns: &[&FieldDescriptor]) -> String {
    let header = columns
        .iter()
        .map(|col| col.label.to_string())
        .collect::<Vec<_>>()
        .join("\t");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header);
    for row in rows {
        let cells = columns
            .iter()
            .map(|col| {
                if row.is_missing(col.key) {
                    String::new()
                } else {
                    format_field(row.get(col.key), col.format)
                }
            })
            .collect::<Vec<_>>()
            .join("\t");
        lines.push(cells);
    }
    lines.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
