//! Record store tests against a real file

use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use versus_tetris::core::SessionStats;
use versus_tetris::engine::{MatchResult, RecordStore};
use versus_tetris::types::PlayerId;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("versus-tetris-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn stats(score: u32, lines: u32) -> SessionStats {
    SessionStats {
        score,
        lines,
        ..SessionStats::default()
    }
}

#[test]
fn test_missing_file_is_empty_store() {
    let dir = scratch_dir("missing");
    let store = RecordStore::load(&dir.join("records.json")).expect("load");
    assert_eq!(store, RecordStore::default());
}

#[test]
fn test_history_round_trip_keeps_newest_ten() {
    let dir = scratch_dir("history");
    let path = dir.join("nested").join("records.json");

    let mut store = RecordStore::default();
    for i in 0..12u32 {
        let result = if i % 2 == 0 {
            MatchResult::Winner(PlayerId::One)
        } else {
            MatchResult::Draw
        };
        let at = Utc.timestamp_opt(1_700_000_000 + i64::from(i), 0).unwrap();
        store.record_match(result, stats(i * 100, i), stats(50, 1), at);
    }
    store.save(&path).expect("save");

    let text = fs::read_to_string(&path).expect("read");
    let json: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert!(json.get("high_score").is_some());

    let loaded = RecordStore::load(&path).expect("load");
    assert_eq!(loaded, store);
    assert_eq!(loaded.matches.len(), 10);
    assert_eq!(loaded.matches[0].players[0].score, 1100);
    assert_eq!(loaded.matches[0].winner, None);
    assert_eq!(loaded.matches[9].players[0].score, 200);
    assert_eq!(loaded.high_score, 1100);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_solo_result_only_moves_high_score() {
    let dir = scratch_dir("solo");
    let path = dir.join("records.json");

    let mut store = RecordStore::default();
    let result = MatchResult::Solo {
        score: 880,
        lines: 12,
        level: 2,
    };
    assert!(store.record_match(result, stats(880, 12), SessionStats::default(), Utc::now()));
    store.save(&path).expect("save");

    let loaded = RecordStore::load(&path).expect("load");
    assert_eq!(loaded.high_score, 880);
    assert!(loaded.matches.is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = scratch_dir("corrupt");
    fs::create_dir_all(&dir).expect("mkdir");
    let path = dir.join("records.json");
    fs::write(&path, "{ not json").expect("write");

    let err = RecordStore::load(&path).expect_err("should fail");
    assert!(format!("{err:#}").contains("failed to parse"));

    let _ = fs::remove_dir_all(&dir);
}
