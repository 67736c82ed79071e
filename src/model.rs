use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::SimulateError;

/// Defaults for `gramsim simulate`
pub const MAX_NUM_PATHS: i64 = 100;
pub const SAMPLE_ID: &str = "sim";
pub const OUTPUT_DIR: &str = ".";
pub const SEED: i64 = 0; // 0: let the backend pick one

/// Validated inputs for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationRequest {
    pub prg: PathBuf,
    pub max_num_paths: u64,
    pub sample_id: String,
    pub output_dir: PathBuf,
    pub seed: i64,
    pub debug: bool,
}

impl SimulationRequest {
    /// Checks the few things that can be checked without touching the
    /// filesystem. Whether the PRG exists or the output directory is
    /// writable is left to the backend.
    pub fn new(
        prg: &Path,
        max_num_paths: i64,
        sample_id: &str,
        output_dir: &Path,
        seed: i64,
        debug: bool,
    ) -> Result<Self, SimulateError> {
        if prg.as_os_str().is_empty() {
            return Err(SimulateError::InvalidArgument(
                "--prg is required".to_string(),
            ));
        }
        if max_num_paths <= 0 {
            return Err(SimulateError::InvalidArgument(format!(
                "--max_num_paths must be a positive integer, got {max_num_paths}"
            )));
        }
        Ok(Self {
            prg: prg.to_path_buf(),
            max_num_paths: max_num_paths as u64,
            sample_id: sample_id.to_string(),
            output_dir: output_dir.to_path_buf(),
            seed,
            debug,
        })
    }

    /// A request with every optional field at its default.
    pub fn with_defaults(prg: &Path) -> Result<Self, SimulateError> {
        Self::new(
            prg,
            MAX_NUM_PATHS,
            SAMPLE_ID,
            Path::new(OUTPUT_DIR),
            SEED,
            false,
        )
    }
}

/// What came back from the child process.
#[derive(Debug, Clone)]
pub struct InvocationResult {
    pub succeeded: bool,
    /// Human readable exit status, e.g. `exit status: 1`.
    pub status: String,
    /// stdout and stderr interleaved as the child wrote them.
    pub combined_output: String,
}
