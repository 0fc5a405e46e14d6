//! FILENAME: engine/src/pitch.rs
//! PURPOSE: Static pitch-type metadata: display labels and chart colors.
//! CONTEXT: Pitch types arrive as two-letter codes ("FF", "SL"). Unknown
//! codes are not an error; they fall back to the code itself and a neutral
//! gray so a new pitch classification upstream degrades gracefully.

use crate::color::Color;

/// Display label for a pitch-type code ("FF" -> "Four-Seam").
/// Unknown codes return the code unchanged.
pub fn pitch_label(code: &str) -> &str {
    match code {
        "FF" => "Four-Seam",
        "SI" => "Sinker",
        "FC" => "Cutter",
        "CH" => "Changeup",
        "CU" => "Curveball",
        "SL" => "Slider",
        "ST" => "Sweeper",
        "FS" => "Splitter",
        "SV" => "Slurve",
        "KN" => "Knuckleball",
        "SC" => "Screwball",
        "CS" => "Slow Curve",
        other => other,
    }
}

/// Badge/chip color for a pitch-type code, neutral gray fallback.
pub fn pitch_color(code: &str) -> Color {
    match code {
        "FF" => Color::new(0x00, 0x00, 0xff),
        "SI" => Color::new(0xff, 0xd7, 0x00),
        "FC" => Color::new(0xff, 0xa5, 0x00),
        "SL" => Color::new(0x00, 0x64, 0x00),
        "ST" => Color::new(0xff, 0x14, 0x93),
        "SV" => Color::new(0x32, 0xcd, 0x32),
        "CU" => Color::new(0xcd, 0x33, 0x33),
        "CH" => Color::new(0x80, 0x00, 0x80),
        "FS" => Color::new(0x40, 0xe0, 0xd0),
        "KN" => Color::new(0x00, 0x00, 0x00),
        "SC" => Color::new(0x99, 0x99, 0x99),
        "CS" => Color::new(0x66, 0x66, 0x66),
        _ => Color::new(0x99, 0x99, 0x99),
    }
}

/// Fill and border color pair for scatter series.
/// The border is a darkened companion of the fill.
pub fn series_colors(code: &str) -> (Color, Color) {
    match code {
        "FF" => (Color::new(0x00, 0x00, 0xff), Color::new(0x00, 0x00, 0xcc)),
        "SI" => (Color::new(0xff, 0xd7, 0x00), Color::new(0xcc, 0xb0, 0x00)),
        "FC" => (Color::new(0xff, 0xa5, 0x00), Color::new(0xcc, 0x84, 0x00)),
        "SL" => (Color::new(0x00, 0x64, 0x00), Color::new(0x00, 0x4d, 0x00)),
        "ST" => (Color::new(0xff, 0x14, 0x93), Color::new(0xcc, 0x10, 0x76)),
        "SV" => (Color::new(0x32, 0xcd, 0x32), Color::new(0x28, 0xa4, 0x28)),
        "CU" => (Color::new(0xcd, 0x33, 0x33), Color::new(0xa4, 0x29, 0x29)),
        "CH" => (Color::new(0x80, 0x00, 0x80), Color::new(0x66, 0x00, 0x66)),
        "FS" => (Color::new(0x40, 0xe0, 0xd0), Color::new(0x33, 0xb3, 0xa6)),
        "KN" => (Color::new(0x00, 0x00, 0x00), Color::new(0x33, 0x33, 0x33)),
        _ => (Color::new(0x99, 0x99, 0x99), Color::new(0x77, 0x77, 0x77)),
    }
}

/// Codes whose badge fill is light enough to need dark text.
pub fn has_light_fill(code: &str) -> bool {
    matches!(code, "SI" | "SV")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(pitch_label("FF"), "Four-Seam");
        assert_eq!(pitch_label("ST"), "Sweeper");
        assert_eq!(pitch_label("CS"), "Slow Curve");
    }

    #[test]
    fn test_unknown_code_falls_back_to_itself() {
        assert_eq!(pitch_label("XX"), "XX");
        assert_eq!(pitch_color("XX"), Color::new(0x99, 0x99, 0x99));
        assert_eq!(
            series_colors("XX"),
            (Color::new(0x99, 0x99, 0x99), Color::new(0x77, 0x77, 0x77))
        );
    }

    #[test]
    fn test_series_border_differs_from_fill() {
        for code in ["FF", "SI", "FC", "SL", "ST", "SV", "CU", "CH", "FS"] {
            let (fill, border) = series_colors(code);
            assert_ne!(fill, border, "border should be darkened for {}", code);
        }
    }

    #[test]
    fn test_light_fills_need_dark_text() {
        assert!(has_light_fill("SI"));
        assert!(has_light_fill("SV"));
        assert!(!has_light_fill("FF"));
    }
}
