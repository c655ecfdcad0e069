use std::num::NonZeroU32;

use crate::{Discipline, ProcessRecord};

/// Round robin with a fixed time quantum.
///
/// Repeats passes over the records in input order, giving each live
/// record up to one quantum per pass. Arrival times are not gated:
/// every record is treated as ready from time 0, so a record with
/// `arrival > 0` can report negative waiting time.
pub struct RoundRobin {
    quantum: NonZeroU32,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroU32) -> RoundRobin {
        RoundRobin { quantum }
    }
}

impl Discipline for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn assign_waiting(&self, plist: &mut [ProcessRecord]) {
        let quantum = self.quantum.get();
        let mut remaining: Vec<u32> = plist.iter().map(|process| process.burst).collect();
        let mut time: i64 = 0;

        loop {
            let mut done = true;

            for (index, process) in plist.iter_mut().enumerate() {
                if remaining[index] > 0 {
                    done = false;

                    if remaining[index] > quantum {
                        time += i64::from(quantum);
                        remaining[index] -= quantum;
                    } else {
                        time += i64::from(remaining[index]);
                        process.waiting =
                            time - i64::from(process.burst) - i64::from(process.arrival);
                        remaining[index] = 0;
                    }
                }
            }

            if done {
                break;
            }
        }
    }
}
