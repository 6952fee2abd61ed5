//! Tests for batch plan construction and feed directory scanning.

use std::fs;
use std::path::Path;

use crate::plan::{is_feed_archive, scan_feeds_dir, BatchPlan, PlanMode, HEADER};

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test]
fn test_header_text_is_exact() {
    assert_eq!(
        HEADER,
        ["project name", "fetch or upload", "file or http address"]
    );
}

#[test]
fn test_mode_column_values() {
    assert_eq!(PlanMode::Upload.as_str(), "upload");
    assert_eq!(PlanMode::Fetch.as_str(), "fetch");
    assert_eq!(PlanMode::Fetch.to_string(), "fetch");
}

#[test]
fn test_is_feed_archive_accepts_convention() {
    assert!(is_feed_archive("gtfs.zip"));
    assert!(is_feed_archive("feed-2024_v2.zip"));
    assert!(is_feed_archive("A1.zip"));
}

#[test]
fn test_is_feed_archive_rejects_other_names() {
    assert!(!is_feed_archive(".zip"));
    assert!(!is_feed_archive("feed"));
    assert!(!is_feed_archive("feed.ZIP"));
    assert!(!is_feed_archive("feed.zip.bak"));
    assert!(!is_feed_archive("a.b.zip"));
    assert!(!is_feed_archive("has space.zip"));
    assert!(!is_feed_archive("caf\u{e9}.zip"));
}

#[test]
fn test_upload_plan_rows() {
    let plan = BatchPlan::upload(Path::new("fixtures/feeds"), &owned(&["a.zip", "b-2.zip"]));

    assert_eq!(plan.len(), 2);
    let rows = plan.entries();
    assert_eq!(rows[0].project, "a");
    assert_eq!(rows[0].mode, PlanMode::Upload);
    assert_eq!(rows[0].location, "fixtures/feeds/a.zip");
    assert_eq!(rows[1].project, "b-2");
    assert_eq!(rows[1].location, "fixtures/feeds/b-2.zip");
}

#[test]
fn test_fetch_plan_rows() {
    let plan = BatchPlan::fetch("gtfs-feeds", &owned(&["seattle.zip"]));

    let rows = plan.entries();
    assert_eq!(rows[0].project, "seattle");
    assert_eq!(rows[0].mode, PlanMode::Fetch);
    assert_eq!(
        rows[0].location,
        "https://gtfs-feeds.s3.amazonaws.com/seattle.zip"
    );
}

#[test]
fn test_empty_plan() {
    let plan = BatchPlan::fetch("bucket", &[]);
    assert!(plan.is_empty());
    assert_eq!(plan.len(), 0);
}

#[test]
fn test_scan_feeds_dir_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.zip", "a.zip", "notes.txt", "bad name.zip"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }
    fs::create_dir(dir.path().join("nested.zip")).unwrap();

    let names = scan_feeds_dir(dir.path()).unwrap();
    assert_eq!(names, vec!["a.zip", "b.zip"]);
}

#[test]
fn test_scan_feeds_dir_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    assert!(scan_feeds_dir(&missing).is_err());
}
