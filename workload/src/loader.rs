use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use scheduler::{Pid, ProcessRecord};

// The input file is whitespace-separated integers, four per process
// record in the order `pid burst arrival priority`. Records do not have
// to be line-aligned. Lines whose first non-blank character is '#' are
// comments. A truncated or malformed record stops the parse; whatever
// was read before it is kept.

/// Reads a workload file into a sequence of process records.
///
/// Fails only if the file itself cannot be read; malformed content
/// degrades to a shorter (possibly empty) sequence, see [`parse`].
pub fn load(path: impl AsRef<Path>) -> io::Result<Vec<ProcessRecord>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse(&contents))
}

/// Parses workload text into a sequence of process records.
pub fn parse(input: &str) -> Vec<ProcessRecord> {
    let mut fields = input
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace);

    let mut records = Vec::new();

    loop {
        let Some(pid) = fields.next() else {
            break;
        };
        let (Some(burst), Some(arrival), Some(priority)) =
            (fields.next(), fields.next(), fields.next())
        else {
            warn!(
                "input ends mid-record after {} complete records, dropping the tail",
                records.len()
            );
            break;
        };

        // Unsigned parses reject negative bursts and arrivals along
        // with any other malformed token.
        let (Ok(pid), Ok(burst), Ok(arrival), Ok(priority)) = (
            pid.parse::<u32>(),
            burst.parse::<u32>(),
            arrival.parse::<u32>(),
            priority.parse::<i32>(),
        ) else {
            warn!(
                "malformed record after {} complete records, stopping the parse",
                records.len()
            );
            break;
        };

        records.push(ProcessRecord::new(Pid::new(pid), burst, arrival, priority));
    }

    debug!("parsed {} process records", records.len());
    records
}
