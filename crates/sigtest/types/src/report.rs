//! Driver result files
//!
//! Each driver runs the test suite on its own and writes a JSON report:
//!
//! ```json
//! {
//!   "tests":   [{"fullTitle": "...", "err": {}}],
//!   "pending": [{"fullTitle": "...", "err": {}}]
//! }
//! ```
//!
//! `tests` lists every test the driver attempted; `pending` lists the tests
//! it declared skipped. A title may appear in both, in which case the
//! pending declaration wins.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::status::TestStatus;

/// One test entry from a driver report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    /// Full test title, the test's identity across drivers.
    #[serde(rename = "fullTitle")]
    pub full_title: String,

    /// Error details for the attempt; an empty mapping means the test
    /// passed. Absent in the file is treated as empty.
    #[serde(default)]
    pub err: serde_json::Map<String, serde_json::Value>,
}

impl TestCase {
    /// Construct a passing test case.
    pub fn passed(full_title: impl Into<String>) -> Self {
        Self {
            full_title: full_title.into(),
            err: serde_json::Map::new(),
        }
    }

    /// Construct a failing test case with an opaque error payload.
    pub fn failed(
        full_title: impl Into<String>,
        err: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            full_title: full_title.into(),
            err,
        }
    }
}

/// A driver's self-reported test run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverReport {
    /// Every test the driver attempted.
    pub tests: Vec<TestCase>,

    /// Tests the driver declared skipped.
    pub pending: Vec<TestCase>,
}

impl DriverReport {
    /// Parse a report from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Titles the driver declared skipped.
    pub fn pending_titles(&self) -> BTreeSet<&str> {
        self.pending.iter().map(|t| t.full_title.as_str()).collect()
    }

    /// Derive the driver's per-title status map.
    ///
    /// Pending titles classify as [`TestStatus::Skipped`] even when the same
    /// title also appears among the attempts with a recorded error. Attempted
    /// titles not declared pending classify by their `err` mapping.
    pub fn classify(&self) -> BTreeMap<String, TestStatus> {
        let pending = self.pending_titles();
        let mut statuses = BTreeMap::new();

        for case in &self.pending {
            statuses.insert(case.full_title.clone(), TestStatus::Skipped);
        }

        for case in &self.tests {
            if pending.contains(case.full_title.as_str()) {
                continue;
            }
            let status = if case.err.is_empty() {
                TestStatus::Success
            } else {
                TestStatus::Failure
            };
            statuses.insert(case.full_title.clone(), status);
        }

        statuses
    }

    /// Non-pending attempted titles, in the order they appear in the file.
    ///
    /// Duplicate titles are preserved as encountered: if a driver reports the
    /// same title twice, the matrix carries two identical rows, one per
    /// occurrence.
    pub fn authoritative_titles(&self) -> Vec<String> {
        let pending = self.pending_titles();
        self.tests
            .iter()
            .filter(|t| !pending.contains(t.full_title.as_str()))
            .map(|t| t.full_title.clone())
            .collect()
    }
}
