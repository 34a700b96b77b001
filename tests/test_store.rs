//! Unit tests for the on-disk store.

mod common;

use std::fs;

use energy_cap_report::{Provenance, Store};

fn store_in(dir: &tempfile::TempDir) -> Store {
    Store::new(Some(dir.path().to_path_buf())).unwrap()
}

#[test]
fn creates_directory_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    assert!(store.reports_dir().is_dir());
}

#[test]
fn history_is_seeded_on_first_run() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    let history = store.load_history().unwrap();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0].label, "Jul–Sep 2023");
    assert!(history.iter().all(|r| r.electricity_unit_p.is_some()));
}

#[test]
fn history_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    let mut history = store.load_history().unwrap();
    history.truncate(2);
    store.save_history(&history).unwrap();

    let loaded = store.load_history().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].label, "Oct–Dec 2023");
}

#[test]
fn corrupt_trend_file_is_reseeded() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    fs::write(tmp.path().join("history.json"), "{not json").unwrap();
    assert_eq!(store.load_history().unwrap().len(), 5);
}

#[test]
fn cached_cap_absent_without_latest_report() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    assert!(store.load_cached_cap().is_none());
}

#[test]
fn cached_cap_is_read_from_latest_report() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    let report = common::report_with_cap(common::sample_snapshot(Provenance::Live));
    store.save_latest(&report).unwrap();

    let raw = store.load_cached_cap().unwrap();
    assert_eq!(raw.electricity_unit_p, Some(25.73));
    assert_eq!(raw.source, Some(Provenance::Live));
}

#[test]
fn same_day_report_is_overwritten() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);

    let mut report = common::report_with_cap(common::sample_snapshot(Provenance::Live));
    let first_path = store.save_daily_report(&report).unwrap();

    report.cap.electricity_unit_p = 26.00;
    let second_path = store.save_daily_report(&report).unwrap();
    assert_eq!(first_path, second_path);

    let contents = fs::read_to_string(second_path).unwrap();
    assert!(contents.contains("26.0"));
}

#[test]
fn atomic_writes_leave_no_temp_files() {
    let tmp = tempfile::tempdir().unwrap();
    let store = store_in(&tmp);
    let report = common::report_with_cap(common::sample_snapshot(Provenance::Live));
    store.save_latest(&report).unwrap();
    store.save_daily_report(&report).unwrap();

    let leftovers: Vec<_> = walk(tmp.path())
        .into_iter()
        .filter(|p| p.to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

fn walk(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).unwrap().flatten() {
        let path = entry.path();
        if path.is_dir() {
            paths.extend(walk(&path));
        } else {
            paths.push(path);
        }
    }
    paths
}
