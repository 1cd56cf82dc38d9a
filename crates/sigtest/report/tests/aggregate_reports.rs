//! Aggregation tests over on-disk driver report files.

use std::path::Path;

use tempfile::TempDir;

use sigtest_report::{aggregate, render_table, ReportError};
use sigtest_types::{DriverId, TestStatus};

fn write_report(dir: &Path, driver: &str, json: &str) {
    std::fs::write(dir.join(format!("{driver}-report.json")), json).unwrap();
}

const VCJS: &str = r#"{
    "tests": [
        {"fullTitle": "A", "err": {}},
        {"fullTitle": "B", "err": {"code": 1}}
    ],
    "pending": []
}"#;

const OTHER: &str = r#"{
    "tests": [{"fullTitle": "A", "err": {}}],
    "pending": []
}"#;

#[test]
fn merges_two_drivers_into_the_expected_matrix() {
    let dir = TempDir::new().unwrap();
    write_report(dir.path(), "vcjs", VCJS);
    write_report(dir.path(), "other", OTHER);

    let matrix = aggregate(dir.path(), &DriverId::new("vcjs")).unwrap();

    assert_eq!(matrix.tests(), ["A", "B"]);
    let drivers: Vec<&str> = matrix.drivers().iter().map(|d| d.as_str()).collect();
    assert_eq!(drivers, ["other", "vcjs"]);

    let vcjs = DriverId::new("vcjs");
    let other = DriverId::new("other");
    assert_eq!(matrix.status(&vcjs, "A"), TestStatus::Success);
    assert_eq!(matrix.status(&other, "A"), TestStatus::Success);
    assert_eq!(matrix.status(&vcjs, "B"), TestStatus::Failure);
    assert_eq!(matrix.status(&other, "B"), TestStatus::Unimplemented);
}

#[test]
fn empty_directory_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();

    let err = aggregate(dir.path(), &DriverId::new("vcjs")).unwrap_err();
    assert!(matches!(err, ReportError::NoReports { .. }));
}

#[test]
fn non_matching_files_do_not_count_as_reports() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a report").unwrap();
    std::fs::write(dir.path().join("report.json"), "{}").unwrap();

    let err = aggregate(dir.path(), &DriverId::new("vcjs")).unwrap_err();
    assert!(matches!(err, ReportError::NoReports { .. }));
}

#[test]
fn malformed_report_names_the_offending_file() {
    let dir = TempDir::new().unwrap();
    write_report(dir.path(), "vcjs", VCJS);
    write_report(dir.path(), "broken", r#"{"tests": "not a list"}"#);

    let err = aggregate(dir.path(), &DriverId::new("vcjs")).unwrap_err();
    match err {
        ReportError::MalformedReport { file, .. } => {
            assert!(file.to_string_lossy().ends_with("broken-report.json"));
        }
        other => panic!("expected malformed report error, got {other:?}"),
    }
}

#[test]
fn pending_wins_across_the_full_pipeline() {
    let dir = TempDir::new().unwrap();
    write_report(
        dir.path(),
        "vcjs",
        r#"{
            "tests": [
                {"fullTitle": "A", "err": {}},
                {"fullTitle": "flaky", "err": {"code": 9}}
            ],
            "pending": [{"fullTitle": "flaky", "err": {}}]
        }"#,
    );

    let matrix = aggregate(dir.path(), &DriverId::new("vcjs")).unwrap();

    // Pending titles are excluded from the authoritative list and classify
    // as skipped despite the recorded error.
    assert_eq!(matrix.tests(), ["A"]);
    assert_eq!(
        matrix.status(&DriverId::new("vcjs"), "flaky"),
        TestStatus::Skipped
    );
}

#[test]
fn duplicate_reference_titles_produce_duplicate_rows() {
    let dir = TempDir::new().unwrap();
    write_report(
        dir.path(),
        "vcjs",
        r#"{
            "tests": [
                {"fullTitle": "A", "err": {}},
                {"fullTitle": "A", "err": {}}
            ],
            "pending": []
        }"#,
    );

    let matrix = aggregate(dir.path(), &DriverId::new("vcjs")).unwrap();
    assert_eq!(matrix.tests(), ["A", "A"]);

    let table = render_table(&matrix);
    assert_eq!(table.matches("<td>A</td>").count(), 2);
}

#[test]
fn missing_reference_driver_yields_headers_only() {
    let dir = TempDir::new().unwrap();
    write_report(dir.path(), "other", OTHER);

    let matrix = aggregate(dir.path(), &DriverId::new("vcjs")).unwrap();
    assert!(matrix.tests().is_empty());
    assert_eq!(matrix.drivers().len(), 1);
}

#[test]
fn aggregation_is_deterministic_over_unchanged_inputs() {
    let dir = TempDir::new().unwrap();
    write_report(dir.path(), "vcjs", VCJS);
    write_report(dir.path(), "other", OTHER);

    let reference = DriverId::new("vcjs");
    let first = aggregate(dir.path(), &reference).unwrap();
    let second = aggregate(dir.path(), &reference).unwrap();

    assert_eq!(first, second);
    assert_eq!(render_table(&first), render_table(&second));
}
