//! Driver invocation builder and runner
//!
//! Turns a named HTTP-message fixture plus a set of command-line style
//! options into one external driver invocation: the fixture is read from
//! disk, a `Date:` trailer and fixed JSON body are appended, the driver is
//! spawned with `--flag value` arguments, the payload is delivered over its
//! standard input, and both output streams are drained to completion
//! concurrently with awaiting process exit.
//!
//! Exit code 0 resolves to the captured standard output; any other exit code
//! resolves to a structured [`RunnerError::Driver`] failure carrying the
//! code and both captured streams.
//!
//! # Example
//!
//! ```rust,ignore
//! use sigtest_runner::{InvocationOptions, Runner};
//!
//! let runner = Runner::new("test/input");
//! let options = InvocationOptions::new("./my-driver", "sign")
//!     .arg("key", "rsa.key");
//! let signature = runner.generate("default-test", &options).await?;
//! ```

pub mod clock;
pub mod error;
pub mod options;
pub mod runner;

pub use clock::{http_date, unix_seconds, Clock, FixedClock, SystemClock};
pub use error::{RunnerError, RunnerResult};
pub use options::{ArgValue, Invocation, InvocationOptions};
pub use runner::{build_payload, Runner};
