//! Unit tests for the archive index and its rendering.

mod common;

use energy_cap_report::render::{archive_summary, render_archive_index};
use energy_cap_report::{ArchiveEntry, ArchiveIndex, Provenance, SpotPriceSummary, Store};

fn entry(date: &str) -> ArchiveEntry {
    ArchiveEntry {
        date: date.to_string(),
        summary: "Cap: 25.73p elec / 6.33p gas".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

#[test]
fn newest_entry_is_inserted_at_the_head() {
    let mut index = ArchiveIndex::default();
    assert!(index.insert(entry("2025-10-01")));
    assert!(index.insert(entry("2025-10-02")));

    assert_eq!(index.entries.len(), 2);
    assert_eq!(index.entries[0].date, "2025-10-02");
    assert_eq!(index.entries[1].date, "2025-10-01");
}

#[test]
fn insertion_is_idempotent_per_date() {
    let mut index = ArchiveIndex::default();
    assert!(index.insert(entry("2025-10-01")));
    // Same date with a different summary is still a duplicate.
    let mut changed = entry("2025-10-01");
    changed.summary = "Cap: 30.00p elec / 7.00p gas".to_string();
    assert!(!index.insert(changed));
    assert_eq!(index.entries.len(), 1);
    assert_eq!(index.entries[0].summary, "Cap: 25.73p elec / 6.33p gas");
}

#[test]
fn index_round_trips_through_the_store() {
    let tmp = tempfile::tempdir().unwrap();
    let store = Store::new(Some(tmp.path().to_path_buf())).unwrap();

    let mut index = ArchiveIndex::default();
    index.insert(entry("2025-10-01"));
    index.insert(entry("2025-10-02"));
    store.save_archive(&index).unwrap();

    let loaded = store.load_archive().unwrap();
    assert_eq!(loaded.entries.len(), 2);
    assert_eq!(loaded.entries[0].date, "2025-10-02");
}

#[test]
fn missing_index_file_loads_as_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let store = Store::new(Some(tmp.path().to_path_buf())).unwrap();
    assert!(store.load_archive().unwrap().entries.is_empty());
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn summary_line_includes_all_available_sections() {
    let cap = common::sample_snapshot(Provenance::Live);
    let bill = energy_cap_report::bill::typical_bill(&cap).unwrap();
    let spot = SpotPriceSummary {
        has_data: true,
        average: Some(18.456),
        low: Some(5.0),
        high: Some(30.0),
        cheapest_slots: vec![],
    };

    let line = archive_summary(&cap, Some(&bill), &spot);
    assert_eq!(
        line,
        "Cap: 25.73p elec / 6.33p gas · Typical bill ~£1718/yr · Spot avg 18.46p"
    );
}

#[test]
fn summary_line_omits_unavailable_sections() {
    let cap = common::sample_snapshot(Provenance::Fallback);
    let line = archive_summary(&cap, None, &SpotPriceSummary::no_data());
    assert_eq!(line, "Cap: 25.73p elec / 6.33p gas");
}

#[test]
fn rendered_index_links_each_date_newest_first() {
    let mut index = ArchiveIndex::default();
    index.insert(entry("2025-10-01"));
    index.insert(entry("2025-10-02"));

    let html = render_archive_index(&index);
    let first = html.find("href=\"2025-10-02.html\"").unwrap();
    let second = html.find("href=\"2025-10-01.html\"").unwrap();
    assert!(first < second);
    assert!(html.contains("Cap: 25.73p elec / 6.33p gas"));
}
