use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::errors::BenchrunError;
use crate::stats::Statistics;
use crate::types::{METRIC_NAMES, Sample};

/// Fixed output filenames requested by the CLI flags.
pub const CSV_FILENAME: &str = "results.csv";
pub const SUMMARY_CSV_FILENAME: &str = "results-summary.csv";

const HRULE: &str = "----------------------------------------------------------------";

/// Raw measurements of one run, as printed in verbose mode.
pub fn format_sample(sample: &Sample) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Wall clock time: {} seconds {} nanoseconds or {:.9} seconds.",
        sample.wall.seconds,
        sample.wall.nanoseconds,
        sample.wall.as_seconds_f64()
    );
    let _ = writeln!(
        out,
        "User time: {} seconds {} microseconds or {:.6} seconds.",
        sample.user_time.seconds,
        sample.user_time.microseconds,
        sample.user_time.as_seconds_f64()
    );
    let _ = writeln!(
        out,
        "System time: {} seconds {} microseconds or {:.6} seconds.",
        sample.sys_time.seconds,
        sample.sys_time.microseconds,
        sample.sys_time.as_seconds_f64()
    );
    let counters = [
        (sample.max_set_size, "Maximum resident set size (KB)"),
        (sample.soft_faults, "Page reclaims (soft page faults)"),
        (sample.hard_faults, "Page faults (hard page faults)"),
        (sample.in_blocks, "Block input operations"),
        (sample.out_blocks, "Block output operations"),
        (sample.voluntary_switches, "Voluntary context switches"),
        (sample.involuntary_switches, "Involuntary context switches"),
    ];
    for (value, label) in counters {
        let _ = writeln!(out, "{:<10} {}.", value, label);
    }
    out
}

/// The summary table: one row per metric with its mean and population
/// standard deviation.
pub fn format_statistics(statistics: &Statistics) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(HRULE);
    out.push('\n');

    let header = format!(
        " {:<30} | {:<15} | {:<20}",
        "Measurement", "Mean", "Std. deviation"
    );
    out.push_str(
        &header
            .if_supports_color(Stream::Stdout, |s| s.bold())
            .to_string(),
    );
    out.push('\n');
    out.push_str(HRULE);
    out.push('\n');

    for (name, summary) in METRIC_NAMES.iter().zip(statistics.metrics) {
        let _ = writeln!(
            out,
            " {:<30} | {:<15} | {:<20}",
            name,
            format!("{:.6}", summary.mean),
            format!("{:.6}", summary.stdev),
        );
    }

    out.push_str(HRULE);
    out.push('\n');
    out
}

/// Per-sample CSV: a 12-column header (experiment index plus the 11 metric
/// names), then one row of raw integer values per sample. No field quoting.
pub fn samples_csv(samples: &[Sample]) -> String {
    let mut out = String::new();
    out.push_str("Experiment");
    for name in METRIC_NAMES {
        out.push(',');
        out.push_str(name);
    }
    out.push('\n');

    for (index, sample) in samples.iter().enumerate() {
        let _ = write!(out, "{}", index);
        for value in sample.metric_values() {
            let _ = write!(out, ",{}", value);
        }
        out.push('\n');
    }
    out
}

/// Aggregate CSV: 22 column names (mean and standard deviation per metric)
/// and exactly one data row.
pub fn statistics_csv(statistics: &Statistics) -> String {
    let mut out = String::new();
    for (i, name) in METRIC_NAMES.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "Mean {},Std. dev. {}", name, name);
    }
    out.push('\n');

    for (i, summary) in statistics.metrics.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{},{}", summary.mean, summary.stdev);
    }
    out.push('\n');
    out
}

/// Write the per-sample CSV table to `path`.
pub fn write_samples_csv(path: &Path, samples: &[Sample]) -> Result<(), BenchrunError> {
    fs::write(path, samples_csv(samples)).map_err(|source| BenchrunError::ReportWriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the one-row aggregate CSV to `path`.
pub fn write_statistics_csv(path: &Path, statistics: &Statistics) -> Result<(), BenchrunError> {
    fs::write(path, statistics_csv(statistics)).map_err(|source| {
        BenchrunError::ReportWriteFailed {
            path: path.to_path_buf(),
            source,
        }
    })
}
