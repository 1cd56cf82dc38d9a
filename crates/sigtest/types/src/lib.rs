//! Shared data model for the sigtest interoperability harness
//!
//! Drivers under test produce one self-reported result file each
//! (`<driverId>-report.json`). This crate models those files, the per-test
//! status classification derived from them, and the conformance matrix the
//! report renders.
//!
//! # Classification
//!
//! Per driver, per test title:
//!
//! - title listed in `pending` → [`TestStatus::Skipped`], regardless of any
//!   error recorded for an attempt under the same title
//! - attempted with a non-empty `err` mapping → [`TestStatus::Failure`]
//! - attempted otherwise → [`TestStatus::Success`]
//! - never attempted by that driver → [`TestStatus::Unimplemented`] at
//!   matrix lookup time

pub mod matrix;
pub mod report;
pub mod status;

pub use matrix::{ConformanceMatrix, DriverId};
pub use report::{DriverReport, TestCase};
pub use status::TestStatus;
