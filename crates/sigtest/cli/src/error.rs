//! CLI error types

use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Driver invocation error
    #[error(transparent)]
    Runner(#[from] sigtest_runner::RunnerError),

    /// Aggregation error
    #[error(transparent)]
    Report(#[from] sigtest_report::ReportError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
