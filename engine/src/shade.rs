//! FILENAME: engine/src/shade.rs
//! PURPOSE: Percentile-driven conditional cell coloring.
//! CONTEXT: Maps a precomputed percentile rank (0-100) to a background and
//! text color pair. Both schemes diverge at the 50th percentile: cool below,
//! warm above. The light scheme interpolates opaque colors through
//! near-white at the midpoint; the dark scheme overlays a translucent tint
//! whose opacity grows with distance from the midpoint so the dark canvas
//! keeps providing text contrast.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Active color scheme for cell shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Light
    }
}

/// Resolved cell colors for one percentile value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellShade {
    pub background: Color,
    pub text: Color,
}

/// Maximum tint opacity at the percentile extremes (dark scheme).
const DARK_TINT_MAX_ALPHA: f64 = 0.45;

/// Percentile-to-color mapping for the active scheme.
///
/// Input outside 0-100 is clamped. Callers skip this entirely for cells
/// without a percentile rank (aggregate rows, ineligible columns).
pub fn percentile_shade(pctl: f64, scheme: ColorScheme) -> CellShade {
    let pctl = pctl.clamp(0.0, 100.0);
    match scheme {
        ColorScheme::Light => CellShade {
            background: light_background(pctl),
            text: light_text(pctl),
        },
        ColorScheme::Dark => CellShade {
            background: dark_background(pctl),
            // Fixed light shade, the dark canvas itself carries contrast
            text: Color::new(0xe6, 0xed, 0xf3),
        },
    }
}

/// Blue (0) -> white (50) -> red (100), two linear segments.
fn light_background(pctl: f64) -> Color {
    if pctl <= 50.0 {
        let t = pctl / 50.0;
        Color::new(
            (60.0 + t * 195.0).round() as u8,
            (100.0 + t * 155.0).round() as u8,
            (240.0 + t * 15.0).round() as u8,
        )
    } else {
        let t = (pctl - 50.0) / 50.0;
        Color::new(
            255,
            (255.0 - t * 180.0).round() as u8,
            (255.0 - t * 200.0).round() as u8,
        )
    }
}

/// Light text in the extreme tails, dark text over the pale mid-range.
fn light_text(pctl: f64) -> Color {
    if pctl < 15.0 || pctl > 85.0 {
        Color::white()
    } else {
        Color::new(0x1a, 0x1a, 0x2e)
    }
}

/// Translucent tint: blue strengthening toward 0, red strengthening toward 100.
fn dark_background(pctl: f64) -> Color {
    if pctl <= 50.0 {
        let opacity = (50.0 - pctl) / 50.0 * DARK_TINT_MAX_ALPHA;
        Color::with_alpha(60, 120, 255, (opacity * 255.0).round() as u8)
    } else {
        let opacity = (pctl - 50.0) / 50.0 * DARK_TINT_MAX_ALPHA;
        Color::with_alpha(255, 70, 50, (opacity * 255.0).round() as u8)
    }
}
