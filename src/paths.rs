//! Where a simulation reads from and writes to.

use std::path::{Path, PathBuf};

/// Locations for one run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub prg: PathBuf,
    pub output_dir: PathBuf,
    sample_id: String,
}

impl ResolvedPaths {
    /// Pure path composition: no existence checks, no directory creation and
    /// no symlink canonicalization. Relative inputs stay relative to the
    /// caller's working directory.
    pub fn resolve(output_dir: &Path, sample_id: &str, prg: &Path) -> Self {
        Self {
            prg: prg.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            sample_id: sample_id.to_string(),
        }
    }

    /// `<output_dir>/<sample_id>`, the prefix the backend gives its outputs.
    pub fn output_prefix(&self) -> PathBuf {
        self.output_dir.join(&self.sample_id)
    }
}
