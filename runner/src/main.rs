use std::io::Write;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::{self, ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::info;
use scheduler::{fcfs, priority, round_robin, sjf, Discipline};

#[derive(Parser, Debug)]
#[command(about = "Computes waiting and turnaround times under classical scheduling disciplines")]
struct Args {
    /// Workload file with whitespace-separated `pid burst arrival priority` records
    input: PathBuf,

    /// Time quantum for the round robin discipline
    #[arg(short, long, default_value = "2")]
    quantum: NonZeroU32,

    /// Run a single discipline instead of all four
    #[arg(short, long, value_enum)]
    discipline: Option<DisciplineKind>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum DisciplineKind {
    Fcfs,
    Sjf,
    Priority,
    RoundRobin,
}

fn disciplines(args: &Args) -> Vec<Box<dyn Discipline>> {
    match args.discipline {
        None => vec![
            Box::new(fcfs()),
            Box::new(sjf()),
            Box::new(priority()),
            Box::new(round_robin(args.quantum)),
        ],
        Some(DisciplineKind::Fcfs) => vec![Box::new(fcfs())],
        Some(DisciplineKind::Sjf) => vec![Box::new(sjf())],
        Some(DisciplineKind::Priority) => vec![Box::new(priority())],
        Some(DisciplineKind::RoundRobin) => vec![Box::new(round_robin(args.quantum))],
    }
}

fn run(args: &Args) -> Result<()> {
    let records = workload::load(&args.input)
        .with_context(|| format!("cannot read workload file {}", args.input.display()))?;
    info!("loaded {} process records", records.len());

    // Every discipline runs on its own pristine copy of the workload.
    for discipline in disciplines(args) {
        let mut plist = records.clone();
        discipline.run(&mut plist);
        print!("{}", workload::format_report(discipline.name(), &plist));
    }

    Ok(())
}

fn main() -> ExitCode {
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    let args = Args::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(if err.use_stderr() { 1 } else { 0 });
    });

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests;
