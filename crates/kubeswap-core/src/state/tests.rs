use tempfile::tempdir;

use super::*;

#[test]
fn missing_state_file_means_no_previous() {
    let dir = tempdir().unwrap();
    let state = SwitchState::load_from(dir.path().join("state.json"));
    assert!(state.previous_context.is_none());
}

#[test]
fn record_then_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("state.json");

    let mut state = SwitchState::load_from(path.clone());
    state.record("prod").unwrap();

    let reloaded = SwitchState::load_from(path);
    assert_eq!(reloaded.previous_context.as_deref(), Some("prod"));
}

#[test]
fn corrupt_state_degrades_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "not json").unwrap();
    let state = SwitchState::load_from(path);
    assert!(state.previous_context.is_none());
}
