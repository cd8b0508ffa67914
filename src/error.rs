//! Error taxonomy for the generator

use std::path::PathBuf;
use thiserror::Error;

/// Errors that terminate a generation run
///
/// Nothing is recovered internally: every variant is reported at the process
/// boundary and turns into a non-zero exit status.
#[derive(Error, Debug)]
pub enum GenError {
    /// Missing, malformed, or out-of-range command-line input
    #[error("{0}")]
    InvalidArgument(String),

    /// Numeric distribution identifier outside the supported range
    #[error("unsupported probability density function id {0}")]
    UnsupportedDistribution(u32),

    /// A sampling routine could not be built or produced a malformed value
    #[error("sampling fault: {0}")]
    SamplingFault(String),

    /// The point buffer could not be allocated
    #[error("cannot allocate memory for {points} points")]
    ResourceExhaustion { points: usize },

    #[error("config file {}: {message}", .path.display())]
    ConfigFile { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Shorthand for [`GenError::InvalidArgument`]
    pub fn invalid(message: impl Into<String>) -> Self {
        GenError::InvalidArgument(message.into())
    }
}
