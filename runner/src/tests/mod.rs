use scheduler::{Pid, ProcessRecord};

mod loader;
mod priority;
mod round_robin;

/// Builds a pristine record sequence from `(pid, burst, arrival, priority)` tuples.
fn records(entries: &[(u32, u32, u32, i32)]) -> Vec<ProcessRecord> {
    entries
        .iter()
        .map(|&(pid, burst, arrival, priority)| {
            ProcessRecord::new(Pid::new(pid), burst, arrival, priority)
        })
        .collect()
}

fn pids(plist: &[ProcessRecord]) -> Vec<Pid> {
    plist.iter().map(|process| process.pid).collect()
}

fn waitings(plist: &[ProcessRecord]) -> Vec<i64> {
    plist.iter().map(|process| process.waiting).collect()
}

fn turnarounds(plist: &[ProcessRecord]) -> Vec<i64> {
    plist.iter().map(|process| process.turnaround).collect()
}
