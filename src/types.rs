use crate::clock::Timespec;

/// CPU time spent in user or kernel mode, as accounted by the OS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuTime {
    pub seconds: i64,
    pub microseconds: i64,
}

impl CpuTime {
    /// Combined value in seconds, for display only.
    pub fn as_seconds_f64(&self) -> f64 {
        self.seconds as f64 + self.microseconds as f64 / 1_000_000.0
    }
}

/// Measurements from a single run of the target command.
///
/// Created fully populated by [`crate::executor::measure`] once the
/// subprocess has terminated; the run loop owns one `Sample` per iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sample {
    /// Wall-clock elapsed time from a monotonic clock.
    pub wall: Timespec,
    pub user_time: CpuTime,
    pub sys_time: CpuTime,
    /// Maximum resident set size, in kilobytes.
    pub max_set_size: i64,
    /// Page reclaims (soft page faults).
    pub soft_faults: i64,
    /// Page faults requiring disk access (hard page faults).
    pub hard_faults: i64,
    /// Block input operations.
    pub in_blocks: i64,
    /// Block output operations.
    pub out_blocks: i64,
    pub voluntary_switches: i64,
    pub involuntary_switches: i64,
}

/// Number of metrics carried through aggregation and CSV output.
pub const METRIC_COUNT: usize = 11;

/// Display names for the aggregated metrics, indexed per [`metric`].
pub const METRIC_NAMES: [&str; METRIC_COUNT] = [
    "Wall clock time (s)",
    "Wall clock time (ns)",
    "User time (s)",
    "System time (s)",
    "Maximum resident set size (KB)",
    "Soft page faults",
    "Hard page faults",
    "Block input operations",
    "Block output operations",
    "Voluntary context switches",
    "Involuntary context switches",
];

/// Indices into [`METRIC_NAMES`] and [`Sample::metric_values`].
pub mod metric {
    pub const WALL_SECONDS: usize = 0;
    pub const WALL_NANOSECONDS: usize = 1;
    pub const USER_SECONDS: usize = 2;
    pub const SYS_SECONDS: usize = 3;
    pub const MAX_SET_SIZE: usize = 4;
    pub const SOFT_FAULTS: usize = 5;
    pub const HARD_FAULTS: usize = 6;
    pub const IN_BLOCKS: usize = 7;
    pub const OUT_BLOCKS: usize = 8;
    pub const VOLUNTARY_SWITCHES: usize = 9;
    pub const INVOLUNTARY_SWITCHES: usize = 10;
}

impl Sample {
    /// The raw values of the 11 aggregated metrics, in [`metric`] order.
    ///
    /// Only the seconds halves of user and system CPU time take part in
    /// aggregation; the microsecond halves are carried for per-run display.
    pub fn metric_values(&self) -> [i64; METRIC_COUNT] {
        [
            self.wall.seconds,
            self.wall.nanoseconds,
            self.user_time.seconds,
            self.sys_time.seconds,
            self.max_set_size,
            self.soft_faults,
            self.hard_faults,
            self.in_blocks,
            self.out_blocks,
            self.voluntary_switches,
            self.involuntary_switches,
        ]
    }
}

/// How much the harness itself says on stdout.
///
/// Quiet mode suppresses harness output only; the measured command's own
/// streams are inherited and never redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

/// One run's immutable configuration, threaded through the run loop instead
/// of process-wide flags.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Command and arguments for the measured subprocess.
    pub argv: Vec<String>,
    /// Number of iterations, at least 1.
    pub iterations: usize,
    pub verbosity: Verbosity,
}
