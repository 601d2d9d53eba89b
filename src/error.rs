use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that abort the extraction pipeline.
///
/// Every variant is fatal: the tool reports the error and exits with a
/// non-zero status. There is no retry or partial-result mode.
#[derive(Debug)]
pub enum StatsError {
    /// The log file could not be opened or read.
    FileAccess { path: PathBuf, source: io::Error },

    /// A line matched the marker but its numeric field did not parse.
    BadElapsedLine { line_no: usize, reason: String },

    /// More matching lines appeared than the grid has cells.
    TooManySamples { expected: usize },

    /// The scan ended before every grid cell was filled.
    IncompleteData { found: usize, expected: usize },

    /// Trimming discards one sample from each end of a row, so fewer
    /// than three trials per process count leaves nothing to average.
    NotEnoughTrials { trials: usize },

    /// A grid with no rows has no single-process baseline to compare
    /// against.
    NoProcs,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::FileAccess { path, source } => {
                write!(f, "can not read {}: {}", path.display(), source)
            }
            StatsError::BadElapsedLine { line_no, reason } => {
                write!(f, "bad elapsed-time value on line {}: {}", line_no, reason)
            }
            StatsError::TooManySamples { expected } => {
                write!(f, "log has more than {} elapsed-time lines", expected)
            }
            StatsError::IncompleteData { found, expected } => {
                write!(
                    f,
                    "log has {} elapsed-time lines, expected {}",
                    found, expected
                )
            }
            StatsError::NotEnoughTrials { trials } => {
                write!(
                    f,
                    "{} trials per process count, need at least 3 to trim",
                    trials
                )
            }
            StatsError::NoProcs => {
                write!(f, "0 process counts, need at least 1 for the baseline")
            }
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::FileAccess { source, .. } => Some(source),
            _ => None,
        }
    }
}
