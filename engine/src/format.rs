//! FILENAME: engine/src/format.rs
//! PURPOSE: Display formatting for leaderboard cell values.
//! CONTEXT: This module converts raw field values to formatted display
//! strings based on each column's FormatRule. Missing values always render
//! as the `--` placeholder.

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// Placeholder shown for missing values in every format rule.
pub const NULL_PLACEHOLDER: &str = "--";

/// Declarative formatting rule attached to a column descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatRule {
    /// Rounded to the nearest whole number ("2412").
    Integer,
    /// Fixed decimal places ("94.7", "-1.25").
    Decimal(u8),
    /// Fraction scaled to percent with fixed decimals ("32.4%").
    Percent(u8),
    /// Clock-notation break tilt ("1:30"); value arrives preformatted.
    Clock,
    /// Plain text passthrough.
    Text,
}

impl Default for FormatRule {
    fn default() -> Self {
        FormatRule::Text
    }
}

/// Format a field value according to the given rule.
pub fn format_field(value: Option<&FieldValue>, rule: FormatRule) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return NULL_PLACEHOLDER.to_string(),
    };

    match rule {
        FormatRule::Integer => match value.number() {
            Some(n) => format!("{:.0}", n),
            None => value.display_value(),
        },
        FormatRule::Decimal(places) => match value.number() {
            Some(n) => format!("{:.prec$}", n, prec = places as usize),
            None => value.display_value(),
        },
        FormatRule::Percent(places) => match value.number() {
            Some(n) => format!("{:.prec$}%", n * 100.0, prec = places as usize),
            None => value.display_value(),
        },
        FormatRule::Clock | FormatRule::Text => match value {
            // Empty text is treated like a missing value
            FieldValue::Text(s) if s.is_empty() => NULL_PLACEHOLDER.to_string(),
            other => other.display_value(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_rounds() {
        assert_eq!(format_field(Some(&FieldValue::Number(2412.6)), FormatRule::Integer), "2413");
        assert_eq!(format_field(Some(&FieldValue::Number(95.0)), FormatRule::Integer), "95");
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(format_field(Some(&FieldValue::Number(94.666)), FormatRule::Decimal(1)), "94.7");
        assert_eq!(format_field(Some(&FieldValue::Number(-4.518)), FormatRule::Decimal(2)), "-4.52");
        assert_eq!(format_field(Some(&FieldValue::Number(0.312)), FormatRule::Decimal(3)), "0.312");
    }

    #[test]
    fn test_percent_scales_fraction() {
        assert_eq!(format_field(Some(&FieldValue::Number(0.324)), FormatRule::Percent(1)), "32.4%");
        assert_eq!(format_field(Some(&FieldValue::Number(0.5)), FormatRule::Percent(1)), "50.0%");
        assert_eq!(format_field(Some(&FieldValue::Number(1.0)), FormatRule::Percent(0)), "100%");
    }

    #[test]
    fn test_clock_passthrough() {
        assert_eq!(format_field(Some(&FieldValue::Text("1:30".into())), FormatRule::Clock), "1:30");
        assert_eq!(format_field(Some(&FieldValue::Text("".into())), FormatRule::Clock), "--");
    }

    #[test]
    fn test_missing_values_render_placeholder() {
        assert_eq!(format_field(None, FormatRule::Integer), "--");
        assert_eq!(format_field(Some(&FieldValue::Empty), FormatRule::Percent(1)), "--");
        assert_eq!(format_field(Some(&FieldValue::Empty), FormatRule::Text), "--");
    }
}
