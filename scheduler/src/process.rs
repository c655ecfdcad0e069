use std::fmt::{self, Display};

/// The PID of a process.
///
/// PIDs come from the input file and are used for display only,
/// uniqueness is not enforced.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(u32);

impl Pid {
    pub fn new(pid: u32) -> Pid {
        Pid(pid)
    }
}

impl PartialEq<u32> for Pid {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One process's static scheduling attributes and computed metrics.
///
/// A sequence of records is the unit every discipline operates on. Each
/// run expects a pristine sequence (computed fields still zero); callers
/// that run several disciplines over the same workload clone the loaded
/// sequence once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    /// The PID of the process.
    pub pid: Pid,

    /// Total CPU time the process requires.
    pub burst: u32,

    /// Time unit at which the process becomes ready.
    pub arrival: u32,

    /// Scheduling priority, lower value means higher priority.
    pub priority: i32,

    /// Computed: time spent ready but not executing.
    ///
    /// Signed on purpose. Round robin does not gate on arrival, so a
    /// record with `arrival > 0` can come out negative there.
    pub waiting: i64,

    /// Computed: `burst + waiting`, uniform across disciplines.
    pub turnaround: i64,
}

impl ProcessRecord {
    pub fn new(pid: Pid, burst: u32, arrival: u32, priority: i32) -> ProcessRecord {
        ProcessRecord {
            pid,
            burst,
            arrival,
            priority,
            waiting: 0,
            turnaround: 0,
        }
    }
}

impl Display for ProcessRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\t{}\t\t{}\t\t{}\t\t{}",
            self.pid, self.burst, self.waiting, self.turnaround
        )
    }
}
