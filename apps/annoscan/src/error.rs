//! Error type shared by target resolution, configuration and file reads.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The changed-files variable was set but could not be interpreted.
    #[error("cannot read ${var}: {reason}")]
    TargetResolution { var: String, reason: String },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type ScanResult<T> = Result<T, ScanError>;
