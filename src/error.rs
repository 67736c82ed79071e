//! Error taxonomy for a simulation run.

use std::path::PathBuf;
use thiserror::Error;

/// Status used for any failure of the external tool, whatever its own code was.
pub const EXIT_FAILURE: i32 = 1;
/// Status for malformed input, matching clap's usage errors.
pub const EXIT_USAGE: i32 = 2;

#[derive(Error, Debug)]
pub enum SimulateError {
    /// Rejected before any process is spawned.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to launch {}: {source}", exe.display())]
    LaunchFailure {
        exe: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and exited non-zero. Its output has already been logged.
    #[error("{} simulate failed with {status}", exe.display())]
    ExternalToolFailure { exe: PathBuf, status: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl SimulateError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SimulateError::InvalidArgument(_) => EXIT_USAGE,
            SimulateError::LaunchFailure { .. }
            | SimulateError::ExternalToolFailure { .. }
            | SimulateError::Config(_) => EXIT_FAILURE,
        }
    }
}
