use std::fmt::Write;

use scheduler::ProcessRecord;

/// Formats one discipline's metrics report.
///
/// The report is a labeled section: a separator and the discipline
/// name, the metrics table in the sequence's current order (priority
/// scheduling reports in sorted order), and the two average lines.
pub fn format_report(name: &str, plist: &[ProcessRecord]) -> String {
    let mut output = String::new();

    writeln!(output, "*********").unwrap();
    writeln!(output, "{name}").unwrap();
    writeln!(
        output,
        "\tProcesses\tBurst time\tWaiting time\tTurn around time"
    )
    .unwrap();
    for process in plist {
        writeln!(output, "{process}").unwrap();
    }

    let (waiting, turnaround) = averages(plist);
    writeln!(output).unwrap();
    writeln!(output, "Average waiting time = {waiting:.2}").unwrap();
    writeln!(output, "Average turn around time = {turnaround:.2}").unwrap();

    output
}

/// Returns the mean waiting and turnaround time over all records.
///
/// An empty sequence averages to (0.0, 0.0) rather than dividing by
/// zero.
pub fn averages(plist: &[ProcessRecord]) -> (f64, f64) {
    if plist.is_empty() {
        return (0.0, 0.0);
    }

    let n = plist.len() as f64;
    let waiting: i64 = plist.iter().map(|process| process.waiting).sum();
    let turnaround: i64 = plist.iter().map(|process| process.turnaround).sum();

    (waiting as f64 / n, turnaround as f64 / n)
}
