//! A workload I/O library.
//!
//! This is used for loading process workloads from disk and reporting
//! the metrics computed by the [`scheduler`] crate's disciplines.

mod loader;

pub use crate::loader::{load, parse};

mod report;

pub use crate::report::{averages, format_report};
