use std::fs;

use mech_shooter::error::GameError;
use mech_shooter::highscores::*;

use tempfile::tempdir;

#[test]
fn default_table_is_five_zeros() {
    assert_eq!(HighScores::default().scores(), &[0, 0, 0, 0, 0]);
    assert_eq!(HighScores::default().best(), 0);
}

#[test]
fn from_scores_sorts_and_truncates() {
    let table = HighScores::from_scores(vec![3, 90, 12, 7, 55, 1, 40]);
    assert_eq!(table.scores(), &[90, 55, 40, 12, 7]);
    assert_eq!(table.best(), 90);
}

#[test]
fn recording_a_zero_session() {
    let mut table = HighScores::from_scores(vec![50, 40, 30, 20, 10]);
    table.record(0);
    assert_eq!(table.scores(), &[50, 40, 30, 20, 10]);

    let mut short = HighScores::from_scores(vec![7, 2]);
    short.record(0);
    assert_eq!(short.scores(), &[7, 2, 0]);

    let mut zeros = HighScores::default();
    zeros.record(0);
    assert_eq!(zeros.scores(), &[0, 0, 0, 0, 0]);
}

#[test]
fn recording_a_new_best() {
    let mut table = HighScores::from_scores(vec![50, 40, 30, 20, 10]);
    table.record(35);
    assert_eq!(table.scores(), &[50, 40, 35, 30, 20]);
    table.record(1000);
    assert_eq!(table.scores(), &[1000, 50, 40, 35, 30]);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let table = HighScores::load(&dir.path().join("nope.json"));
    assert_eq!(table, HighScores::default());
}

#[test]
fn corrupt_file_loads_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    for bad in ["not json", "{\"a\": 1}", "[1, -2, 3]", "[1.5]", ""] {
        fs::write(&path, bad).unwrap();
        assert!(matches!(HighScores::read(&path), Err(GameError::ScoreFormat { .. })), "{bad}");
        assert_eq!(HighScores::load(&path), HighScores::default(), "{bad}");
    }
}

#[test]
fn missing_file_read_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = HighScores::read(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, GameError::Io { .. }));
}

#[test]
fn save_then_load_is_identical() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let table = HighScores::from_scores(vec![812, 400, 400, 3, 0]);
    table.save(&path).unwrap();

    let reloaded = HighScores::load(&path);
    assert_eq!(reloaded, table);

    // And once more, through a second save
    reloaded.save(&path).unwrap();
    assert_eq!(HighScores::load(&path).scores(), &[812, 400, 400, 3, 0]);
}

#[test]
fn saved_file_is_a_plain_json_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    HighScores::from_scores(vec![5, 4, 3, 2, 1]).save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[5,4,3,2,1]");
}

#[test]
fn unsorted_file_is_normalised_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    fs::write(&path, "[1, 9, 4, 16, 25, 36]").unwrap();
    assert_eq!(HighScores::load(&path).scores(), &[36, 25, 16, 9, 4]);
}

#[test]
fn save_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no/such/dir/scores.json");
    let err = HighScores::default().save(&path).unwrap_err();
    assert!(matches!(err, GameError::Io { .. }));
}

#[test]
fn record_session_persists_the_score() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scores.json");
    let mut table = HighScores::from_scores(vec![40, 30]);
    table.record_session(35, &path);
    assert_eq!(table.scores(), &[40, 35, 30]);
    assert_eq!(HighScores::read(&path).unwrap(), table);
}

#[test]
fn record_session_keeps_the_score_when_saving_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("scores.json");
    let mut table = HighScores::default();
    table.record_session(12, &path);
    assert_eq!(table.best(), 12);
    assert!(!path.exists());
}
