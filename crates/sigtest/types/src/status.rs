//! Per-test status classification

use serde::{Deserialize, Serialize};

/// Outcome of one test for one driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    /// The driver attempted the test and reported no error.
    Success,
    /// The driver attempted the test and reported an error.
    Failure,
    /// The driver declared the test intentionally not executed.
    Skipped,
    /// The driver never reported an entry for the test at all.
    Unimplemented,
}

impl TestStatus {
    /// CSS class used for the matrix cell.
    pub fn css_class(&self) -> &'static str {
        match self {
            TestStatus::Success => "success",
            TestStatus::Failure => "failure",
            TestStatus::Skipped => "skipped",
            TestStatus::Unimplemented => "unimplemented",
        }
    }

    /// Literal mark rendered in the matrix cell.
    ///
    /// Skipped and unimplemented are visually identical; the CSS class is
    /// what distinguishes them in the page.
    pub fn mark(&self) -> &'static str {
        match self {
            TestStatus::Success => "✓",
            TestStatus::Failure => "❌",
            TestStatus::Skipped | TestStatus::Unimplemented => "-",
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}
