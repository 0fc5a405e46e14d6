//! FILENAME: persistence/src/loader.rs
//! Loads the JSON data bundle produced by the upstream stats pipeline.
//!
//! PURPOSE: One-time bulk load at startup. The pitch and pitcher
//! leaderboards and the metadata are required; a session cannot start
//! without them. The hitter leaderboard and the per-pitch detail feed are
//! optional and default to empty.

use std::fs;
use std::path::Path;

use board_engine::{Dataset, Metadata};
use engine::Row;
use scatter_engine::DetailMap;
use serde::de::DeserializeOwned;

use crate::error::LoadError;

pub const PITCH_FILE: &str = "pitch_leaderboard.json";
pub const PITCHER_FILE: &str = "pitcher_leaderboard.json";
pub const HITTER_FILE: &str = "hitter_leaderboard.json";
pub const METADATA_FILE: &str = "metadata.json";
pub const DETAILS_FILE: &str = "pitch_details.json";

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn read_required<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T, LoadError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(LoadError::MissingFile(path));
    }
    read_json(&path)
}

/// Loads the full dataset from a data directory. A missing hitter file is
/// not an error, it just leaves that view empty.
pub fn load_dataset(dir: &Path) -> Result<Dataset, LoadError> {
    let pitch: Vec<Row> = read_required(dir, PITCH_FILE)?;
    let pitcher: Vec<Row> = read_required(dir, PITCHER_FILE)?;
    let metadata: Metadata = read_required(dir, METADATA_FILE)?;

    let hitter_path = dir.join(HITTER_FILE);
    let hitter: Vec<Row> = if hitter_path.is_file() {
        read_json(&hitter_path)?
    } else {
        log::debug!("no {} in {}, hitter view empty", HITTER_FILE, dir.display());
        Vec::new()
    };

    log::debug!(
        "loaded dataset: {} pitch rows, {} pitcher rows, {} hitter rows",
        pitch.len(),
        pitcher.len(),
        hitter.len()
    );

    Ok(Dataset {
        pitch,
        pitcher,
        hitter,
        metadata,
    })
}

/// Loads the per-pitcher pitch detail feed for the scatter charts. The
/// feed is optional; without it the charts simply have nothing to plot.
pub fn load_details(dir: &Path) -> Result<DetailMap, LoadError> {
    let path = dir.join(DETAILS_FILE);
    if !path.is_file() {
        log::warn!("no {} in {}, scatter details empty", DETAILS_FILE, dir.display());
        return Ok(DetailMap::default());
    }
    let details: DetailMap = read_json(&path)?;
    log::debug!(
        "loaded pitch details: {} samples for {} pitchers",
        details.values().map(Vec::len).sum::<usize>(),
        details.len()
    );
    Ok(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut f = File::create(dir.join(name)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    fn write_minimal_bundle(dir: &Path) {
        write_file(
            dir,
            PITCH_FILE,
            r#"[{ "pitcher": "A. Alpha", "team": "SEA", "pitchType": "FF", "count": 120, "velocity": 95.2, "velocity_pctl": 88.0 }]"#,
        );
        write_file(
            dir,
            PITCHER_FILE,
            r#"[{ "pitcher": "A. Alpha", "team": "SEA", "count": 180 }]"#,
        );
        write_file(
            dir,
            METADATA_FILE,
            r#"{ "teams": ["SEA"], "pitchTypes": ["FF"], "leagueAverages": { "FF": { "velocity": 93.8 } } }"#,
        );
    }

    #[test]
    fn test_load_dataset_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_bundle(dir.path());

        let dataset = load_dataset(dir.path()).unwrap();
        assert_eq!(dataset.pitch.len(), 1);
        assert_eq!(dataset.pitch[0].number("velocity"), Some(95.2));
        assert_eq!(dataset.pitch[0].percentile("velocity"), Some(88.0));
        assert_eq!(dataset.metadata.teams, vec!["SEA"]);
        // No hitter file, view stays empty.
        assert!(dataset.hitter.is_empty());
    }

    #[test]
    fn test_missing_required_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_bundle(dir.path());
        fs::remove_file(dir.path().join(METADATA_FILE)).unwrap();

        match load_dataset(dir.path()) {
            Err(LoadError::MissingFile(path)) => {
                assert!(path.ends_with(METADATA_FILE));
            }
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_bundle(dir.path());
        write_file(dir.path(), PITCH_FILE, "{ not json");

        assert!(matches!(
            load_dataset(dir.path()),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_null_stats_survive_loading() {
        let dir = tempfile::tempdir().unwrap();
        write_minimal_bundle(dir.path());
        write_file(
            dir.path(),
            PITCH_FILE,
            r#"[{ "pitcher": "B. Beta", "spinRate": null, "breakTilt": "1:30" }]"#,
        );

        let dataset = load_dataset(dir.path()).unwrap();
        let row = &dataset.pitch[0];
        assert!(row.is_missing("spinRate"));
        assert_eq!(row.text("breakTilt"), Some("1:30"));
    }

    #[test]
    fn test_details_optional() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_details(dir.path()).unwrap().is_empty());

        write_file(
            dir.path(),
            DETAILS_FILE,
            r#"{ "A. Alpha": [ { "pt": "FF", "ivb": 16.0, "hb": 8.0, "v": 95.0 } ] }"#,
        );
        let details = load_details(dir.path()).unwrap();
        assert_eq!(details["A. Alpha"].len(), 1);
        assert_eq!(details["A. Alpha"][0].pitch_type, "FF");
    }
}
