//! Driver report discovery and matrix assembly

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use sigtest_types::{ConformanceMatrix, DriverId, DriverReport};

use crate::error::{ReportError, ReportResult};

/// Filename suffix that marks a driver result file.
pub const REPORT_SUFFIX: &str = "-report.json";

/// Merge every driver report in `results_dir` into a conformance matrix.
///
/// Files named `<driverId>-report.json` are parsed strictly; a file that
/// does not match the expected shape aborts aggregation with an error naming
/// it. The authoritative row list is taken from the `reference` driver's
/// non-pending attempts, in file order with duplicates preserved. Columns
/// are every discovered driver, sorted lexicographically.
pub fn aggregate(results_dir: &Path, reference: &DriverId) -> ReportResult<ConformanceMatrix> {
    let mut statuses = BTreeMap::new();
    let mut tests = Vec::new();

    for entry in fs::read_dir(results_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        let Some(driver) = file_name.strip_suffix(REPORT_SUFFIX) else {
            continue;
        };

        let path = entry.path();
        let text = fs::read_to_string(&path)?;
        let report = DriverReport::from_json(&text)
            .map_err(|source| ReportError::MalformedReport { file: path, source })?;

        debug!(
            driver,
            attempted = report.tests.len(),
            pending = report.pending.len(),
            "classified driver report"
        );

        if driver == reference.as_str() {
            tests = report.authoritative_titles();
        }
        statuses.insert(DriverId::new(driver.to_string()), report.classify());
    }

    if statuses.is_empty() {
        return Err(ReportError::NoReports {
            dir: results_dir.to_path_buf(),
            suffix: REPORT_SUFFIX,
        });
    }

    if !statuses.contains_key(reference) {
        // Without the reference driver's report there is no authoritative
        // test list; the matrix renders headers only.
        warn!(reference = %reference, "reference driver has no report file");
    }

    Ok(ConformanceMatrix::new(tests, statuses))
}
