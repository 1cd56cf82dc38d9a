//! The conformance matrix: test identity × driver → status

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::status::TestStatus;

/// Identity of a driver under test, derived from its report filename
/// (`<driverId>-report.json` → `<driverId>`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DriverId(String);

impl DriverId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The merged view over every driver's result file.
///
/// Rows are the authoritative test titles (the reference driver's non-pending
/// attempts, in file order, duplicates preserved); columns are every
/// discovered driver, sorted lexicographically. Built once per aggregation
/// run, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceMatrix {
    tests: Vec<String>,
    drivers: Vec<DriverId>,
    statuses: BTreeMap<DriverId, BTreeMap<String, TestStatus>>,
}

impl ConformanceMatrix {
    /// Assemble a matrix from per-driver status maps.
    ///
    /// Drivers are sorted here; callers hand over whatever discovery order
    /// the filesystem produced.
    pub fn new(
        tests: Vec<String>,
        statuses: BTreeMap<DriverId, BTreeMap<String, TestStatus>>,
    ) -> Self {
        let drivers: Vec<DriverId> = statuses.keys().cloned().collect();
        Self {
            tests,
            drivers,
            statuses,
        }
    }

    /// Authoritative test titles, one matrix row each.
    pub fn tests(&self) -> &[String] {
        &self.tests
    }

    /// Discovered drivers in lexicographic order, one matrix column each.
    pub fn drivers(&self) -> &[DriverId] {
        &self.drivers
    }

    /// Status of one cell. A driver with no entry for the title — or a
    /// driver the matrix has never heard of — reads as
    /// [`TestStatus::Unimplemented`].
    pub fn status(&self, driver: &DriverId, test: &str) -> TestStatus {
        self.statuses
            .get(driver)
            .and_then(|by_title| by_title.get(test))
            .copied()
            .unwrap_or(TestStatus::Unimplemented)
    }
}
