use std::fs;
use std::path::PathBuf;

use starfall::score::HighScoreManager;

/// A per-test scratch path so parallel tests never share a file.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("starfall_test_{}_{}", std::process::id(), name))
}

#[test]
fn missing_file_loads_as_zero() {
    let path = scratch("missing");
    let _ = fs::remove_file(&path);
    let scores = HighScoreManager::load(&path);
    assert_eq!(scores.best(), 0);
    assert_eq!(scores.current(), 0);
}

#[test]
fn corrupt_file_loads_as_zero() {
    let path = scratch("corrupt");
    fs::write(&path, "not a number").unwrap();
    let scores = HighScoreManager::load(&path);
    assert_eq!(scores.best(), 0);
    let _ = fs::remove_file(&path);
}

#[test]
fn stored_value_survives_whitespace() {
    let path = scratch("whitespace");
    fs::write(&path, " 450 \n").unwrap();
    let scores = HighScoreManager::load(&path);
    assert_eq!(scores.best(), 450);
    let _ = fs::remove_file(&path);
}

#[test]
fn new_best_is_persisted() {
    let path = scratch("persist");
    let _ = fs::remove_file(&path);

    let mut scores = HighScoreManager::load(&path);
    scores.record(500);
    assert_eq!(scores.best(), 500);

    // A fresh manager sees the persisted value
    let reloaded = HighScoreManager::load(&path);
    assert_eq!(reloaded.best(), 500);
    let _ = fs::remove_file(&path);
}

#[test]
fn lower_score_does_not_touch_best() {
    let path = scratch("lower");
    fs::write(&path, "500").unwrap();

    let mut scores = HighScoreManager::load(&path);
    scores.record(300);
    assert_eq!(scores.best(), 500);
    assert_eq!(fs::read_to_string(&path).unwrap(), "500");
    let _ = fs::remove_file(&path);
}

#[test]
fn session_score_is_monotonic() {
    let path = scratch("monotonic");
    let _ = fs::remove_file(&path);

    let mut scores = HighScoreManager::load(&path);
    scores.record(100);
    scores.record(50); // stale observation must not lower the session score
    assert_eq!(scores.current(), 100);
    let _ = fs::remove_file(&path);
}

#[test]
fn new_session_resets_current_but_keeps_best() {
    let path = scratch("session");
    let _ = fs::remove_file(&path);

    let mut scores = HighScoreManager::load(&path);
    scores.record(800);
    scores.start_session();
    assert_eq!(scores.current(), 0);
    assert_eq!(scores.best(), 800);

    // Best across sessions is the max of all observed session scores
    scores.record(200);
    assert_eq!(scores.best(), 800);
    let _ = fs::remove_file(&path);
}
