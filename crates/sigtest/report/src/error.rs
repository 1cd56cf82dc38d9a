//! Aggregation error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while aggregating driver result files.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No `<driverId>-report.json` files were found in the results
    /// directory. Fatal: no partial report is written.
    #[error("no driver reports matching *{suffix} found in {dir}")]
    NoReports {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Expected filename suffix.
        suffix: &'static str,
    },

    /// A result file exists but does not parse as a driver report.
    #[error("malformed driver report {file}: {source}")]
    MalformedReport {
        /// The offending file.
        file: PathBuf,
        source: serde_json::Error,
    },

    /// Filesystem failure while scanning or reading result files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for aggregation operations.
pub type ReportResult<T> = Result<T, ReportError>;
