//! FILENAME: board-engine/src/dataset.rs
//! Loaded row collections plus league-wide metadata.
//!
//! The dashboard never mutates these after load; every pipeline stage
//! borrows rows from here and returns derived structures.

use engine::Row;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::definition::BoardKind;

// ============================================================================
// METADATA
// ============================================================================

/// League-wide context shipped alongside the row collections: dropdown
/// option lists, dataset provenance, and league-average reference rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub teams: Vec<String>,
    pub pitch_types: Vec<String>,
    pub generated_at: String,
    pub total_pitches: u64,
    pub total_pitchers: u64,
    pub total_hitters: u64,
    /// Per pitch type: mean of every numeric metric over that type's rows,
    /// plus a formatted tilt string and the sample count.
    pub league_averages: FxHashMap<String, Row>,
    pub pitcher_league_averages: Row,
    pub hitter_league_averages: Row,
}

// ============================================================================
// DATASET
// ============================================================================

/// The full data bundle the dashboard operates on: one row collection per
/// view and the shared metadata.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub pitch: Vec<Row>,
    pub pitcher: Vec<Row>,
    pub hitter: Vec<Row>,
    pub metadata: Metadata,
}

impl Dataset {
    pub fn rows(&self, kind: BoardKind) -> &[Row] {
        match kind {
            BoardKind::Pitch => &self.pitch,
            BoardKind::Pitcher => &self.pitcher,
            BoardKind::Hitter => &self.hitter,
        }
    }
}
