//! Runner error types

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors produced while building or executing one driver invocation.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// A required invocation option was empty.
    #[error("missing required option: {0}")]
    MissingOption(&'static str),

    /// The fixture file could not be read.
    #[error("failed to read fixture {path}: {source}")]
    Fixture {
        /// Path the runner tried to load.
        path: PathBuf,
        source: std::io::Error,
    },

    /// The driver executable could not be started.
    #[error("failed to spawn driver '{program}': {source}")]
    Spawn {
        /// Program named by the invocation.
        program: String,
        source: std::io::Error,
    },

    /// The driver ran and exited non-zero.
    #[error("Driver exited with error code {code}. {stderr}")]
    Driver {
        /// Process exit code; -1 when the driver was killed by a signal.
        code: i32,
        /// Everything the driver wrote to standard output.
        stdout: String,
        /// Everything the driver wrote to standard error.
        stderr: String,
    },

    /// The driver exceeded the configured time limit and was killed.
    #[error("driver timed out after {0:?}")]
    Timeout(Duration),

    /// I/O failure while feeding or draining the driver's streams.
    #[error("driver I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;
