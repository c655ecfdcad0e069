//! A scheduling discipline library.
//!
//! This library provides the process record model and the four
//! classical scheduling disciplines that compute per-process waiting
//! and turnaround times over a batch workload.
//!

use std::num::NonZeroU32;

mod discipline;

pub use crate::discipline::Discipline;

mod process;

pub use crate::process::{Pid, ProcessRecord};

mod schedulers;

use schedulers::{Fcfs, Priority, RoundRobin, Sjf};

/// Returns a [`Discipline`] with a first come first served policy.
///
/// The input order of the record sequence is treated as the arrival
/// order; waiting times are the cumulative bursts of the records that
/// run earlier.
pub fn fcfs() -> impl Discipline {
    Fcfs
}

/// Returns a [`Discipline`] with a shortest job first policy.
///
/// Runs a one-time-unit-per-step simulation that honors arrival times
/// and idles when nothing is ready. Ties on remaining burst go to the
/// record that appears first in the sequence.
pub fn sjf() -> impl Discipline {
    Sjf
}

/// Returns a [`Discipline`] with a non-preemptive priority policy.
///
/// Sorts the sequence ascending by priority value (stable on ties) and
/// then applies first come first served to the sorted sequence.
pub fn priority() -> impl Discipline {
    Priority
}

/// Returns a [`Discipline`] with a round robin policy.
///
/// * `quantum` - the time quantum a record can run per pass before the
///               next record takes over. Arrival times are not gated;
///               every record is ready from time 0.
pub fn round_robin(quantum: NonZeroU32) -> impl Discipline {
    RoundRobin::new(quantum)
}
