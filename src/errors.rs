use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BenchrunError {
    #[error("Cannot be both verbose and quiet")]
    VerbosityConflict,

    #[error("Must perform at least one iteration")]
    InvalidIterations,

    #[error("Must specify a command to measure")]
    EmptyCommand,

    #[error("Failed to read the monotonic clock: {0}")]
    ClockFailed(std::io::Error),

    #[error("Could not start command '{command}': {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("Failed to wait for command '{command}': {source}")]
    WaitFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("Command '{command}' failed: {status}")]
    CommandFailed { command: String, status: String },

    #[error("Failed to write {path}: {source}")]
    ReportWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}
