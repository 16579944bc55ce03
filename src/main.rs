use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;

use benchrun::errors::BenchrunError;
use benchrun::types::{RunConfig, Verbosity};
use benchrun::{executor, parse, report, stats};

#[derive(Parser)]
#[command(
    name = "benchrun",
    version,
    about = "Time repeated runs of a command and summarise its OS resource usage",
    after_help = "Example: time 100 verbose runs of 'sleep 2':\n  benchrun -v -i 100 -c 'sleep 2'"
)]
struct Cli {
    /// Command to measure, split on whitespace (no shell quoting)
    #[arg(short, long)]
    command: String,

    /// Number of times to run COMMAND
    #[arg(short, long, default_value_t = 10)]
    iterations: usize,

    /// Print each run's raw measurements as it completes
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the summary table (the measured command's output is not redirected)
    #[arg(short, long)]
    quiet: bool,

    /// Save results as a LaTeX table named results.tex (not implemented)
    #[arg(short, long)]
    latex: bool,

    /// Save results as a JSON file named results.json (not implemented)
    #[arg(short, long)]
    json: bool,

    /// Save per-run results to results.csv and the summary to results-summary.csv
    #[arg(short = 's', long)]
    csv: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let verbosity = match (cli.verbose, cli.quiet) {
        (true, true) => return Err(BenchrunError::VerbosityConflict.into()),
        (true, false) => Verbosity::Verbose,
        (false, true) => Verbosity::Quiet,
        (false, false) => Verbosity::Normal,
    };

    if cli.iterations < 1 {
        return Err(BenchrunError::InvalidIterations.into());
    }

    if verbosity == Verbosity::Verbose {
        println!("Parsing: {}.", cli.command);
    }
    let argv = parse::tokenize_command(&cli.command);
    if argv.is_empty() {
        return Err(BenchrunError::EmptyCommand.into());
    }

    let config = RunConfig {
        argv,
        iterations: cli.iterations,
        verbosity,
    };

    // Strictly sequential: the next iteration starts only after the
    // previous subprocess has terminated and its sample is recorded.
    // A failed iteration aborts the run, discarding earlier samples.
    let mut samples = Vec::with_capacity(config.iterations);
    for experiment in 0..config.iterations {
        if config.verbosity == Verbosity::Verbose {
            println!("\nRunning experiment: {}.", experiment);
            println!("Executing {} in child process.", config.argv[0]);
        }
        let sample = executor::measure(&config.argv)?;
        if config.verbosity == Verbosity::Verbose {
            print!("{}", report::format_sample(&sample));
        }
        samples.push(sample);
    }

    let statistics = stats::aggregate(&samples);

    if config.verbosity != Verbosity::Quiet {
        print!("{}", report::format_statistics(&statistics));
    }

    if cli.latex {
        println!("LaTeX output not implemented.");
    }
    if cli.json {
        println!("JSON output not implemented.");
    }
    if cli.csv {
        report::write_samples_csv(Path::new(report::CSV_FILENAME), &samples)?;
        report::write_statistics_csv(Path::new(report::SUMMARY_CSV_FILENAME), &statistics)?;
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
