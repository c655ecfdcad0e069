use crate::{Discipline, ProcessRecord};

/// Shortest job first, simulated one time unit at a time.
///
/// At every step the eligible record (arrived, burst left) with the
/// smallest remaining burst runs for one unit; ties go to the lowest
/// index. Because eligibility is re-evaluated every unit, a shorter
/// job arriving mid-burst takes over at the next unit.
pub struct Sjf;

impl Discipline for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn assign_waiting(&self, plist: &mut [ProcessRecord]) {
        let mut remaining: Vec<u32> = plist.iter().map(|process| process.burst).collect();

        // Zero-burst records never enter the eligible scan; count them
        // complete up front so the loop terminates.
        let mut completed = remaining.iter().filter(|&&left| left == 0).count();
        let mut t: i64 = 0;

        while completed != plist.len() {
            let mut minimum = u32::MAX;
            let mut shortest = None;

            for (index, process) in plist.iter().enumerate() {
                if i64::from(process.arrival) <= t
                    && remaining[index] < minimum
                    && remaining[index] > 0
                {
                    minimum = remaining[index];
                    shortest = Some(index);
                }
            }

            let Some(shortest) = shortest else {
                // Nothing has arrived yet, idle for one unit.
                t += 1;
                continue;
            };

            remaining[shortest] -= 1;

            if remaining[shortest] == 0 {
                completed += 1;
                let process = &mut plist[shortest];
                process.waiting = t + 1 - i64::from(process.burst) - i64::from(process.arrival);
            }

            t += 1;
        }
    }
}
