//! FILENAME: persistence/src/lib.rs
//! Dashboard Persistence Module
//!
//! Handles loading the generated JSON data files, exporting result sets
//! to CSV/TSV, and capturing/restoring shareable session state.

mod error;
mod export;
mod loader;
mod share;

pub use error::LoadError;
pub use export::{to_csv, to_tsv};
pub use loader::{
    load_dataset, load_details, DETAILS_FILE, HITTER_FILE, METADATA_FILE, PITCHER_FILE, PITCH_FILE,
};
pub use share::{
    apply_share_state, capture_share_state, PARAM_DIRECTION, PARAM_HAND, PARAM_MIN_COUNT,
    PARAM_PAGE, PARAM_PITCH_TYPES, PARAM_SEARCH, PARAM_SORT, PARAM_TAB, PARAM_TEAM,
};

#[cfg(test)]
mod tests {
    use super::*;
    use board_engine::Dashboard;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn integration_test_load_share_export() {
        let dir = TempDir::new().unwrap();
        let pitch = serde_json::json!([
            {"pitcher": "A. Alpha", "team": "SEA", "throws": "R", "pitchType": "FF",
             "count": 120, "velocity": 95.1, "velocity_pctl": 88.0},
            {"pitcher": "B. Beta", "team": "TEX", "throws": "L", "pitchType": "SL",
             "count": 40, "velocity": 86.4, "velocity_pctl": 12.0}
        ]);
        fs::write(dir.path().join(PITCH_FILE), pitch.to_string()).unwrap();
        fs::write(dir.path().join(PITCHER_FILE), "[]").unwrap();
        fs::write(dir.path().join(METADATA_FILE), "{}").unwrap();

        let dataset = load_dataset(dir.path()).unwrap();
        let mut dashboard = Dashboard::new(dataset);
        dashboard.set_team(Some("SEA".to_string()));

        // Shared state survives a capture/apply cycle on freshly loaded data.
        let params = capture_share_state(dashboard.state());
        let mut restored = Dashboard::new(load_dataset(dir.path()).unwrap());
        apply_share_state(&mut restored, &params);
        assert_eq!(restored.state().team.as_deref(), Some("SEA"));

        let rows = restored.export_rows();
        let columns = restored.export_columns();
        let csv = to_csv(&rows, &columns);
        assert!(csv.starts_with("\"Pitcher\""));
        assert!(csv.contains("\"A. Alpha\""));
        assert!(!csv.contains("B. Beta"));
    }
}
