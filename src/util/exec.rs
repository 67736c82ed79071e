//! Locating and running the gramtools backend executable.

use anyhow::{anyhow, Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use crate::error::SimulateError;

/// Name searched for on PATH when nothing more specific is given.
pub const DEFAULT_EXEC_NAME: &str = "gram";
pub const EXEC_ENV_VAR: &str = "GRAMSIM_GRAMTOOLS_EXEC";

/// Where the backend lives. Resolved once at startup and handed to whatever
/// needs to spawn it; never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecConfig {
    exe: PathBuf,
}

impl ExecConfig {
    pub fn new(exe: impl Into<PathBuf>) -> Self {
        Self { exe: exe.into() }
    }

    /// Priority: CLI override > environment variable > PATH search
    pub fn resolve(cli_opt: Option<&Path>) -> Result<Self, SimulateError> {
        Self::resolve_with(cli_opt, std::env::var_os(EXEC_ENV_VAR).map(PathBuf::from))
    }

    fn resolve_with(
        cli_opt: Option<&Path>,
        env_opt: Option<PathBuf>,
    ) -> Result<Self, SimulateError> {
        if let Some(p) = cli_opt {
            if p.exists() {
                return Ok(Self::new(p));
            }
            return Err(SimulateError::Config(format!(
                "gramtools backend not found at {}",
                p.display()
            )));
        }
        if let Some(p) = env_opt {
            return Ok(Self::new(p));
        }
        which::which(DEFAULT_EXEC_NAME)
            .map(Self::new)
            .map_err(|_| {
                SimulateError::Config(format!(
                    "{DEFAULT_EXEC_NAME} not found (set --gramtools-exec, {EXEC_ENV_VAR}, or PATH)"
                ))
            })
    }

    pub fn exe(&self) -> &Path {
        &self.exe
    }
}

pub fn get_version(bin: &Path) -> Result<String> {
    let output = Command::new(bin)
        .arg("--version")
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("failed to spawn {} --version", bin.display()))?;

    let first_line = |bytes: &[u8]| {
        String::from_utf8_lossy(bytes)
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(str::to_string)
    };

    first_line(&output.stdout)
        .or_else(|| first_line(&output.stderr))
        .ok_or_else(|| {
            anyhow!(
                "{} --version produced no output on stdout/stderr ({})",
                bin.display(),
                output.status
            )
        })
}

/// Spawn `cmd` with stdout and stderr sharing one pipe and block until it
/// exits. Output is returned interleaved in the order the child wrote it.
///
/// There is no timeout: a child that never exits blocks the caller forever,
/// so a stuck run has to be killed from outside (signal, job control).
pub fn run_combined(mut cmd: Command) -> std::io::Result<(ExitStatus, String)> {
    let (mut reader, writer) = std::io::pipe()?;
    cmd.stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer);
    let mut child = cmd.spawn()?;
    // `cmd` still holds our copies of the write end; EOF needs them closed.
    drop(cmd);

    let mut buf = Vec::new();
    let read = reader.read_to_end(&mut buf);
    let status = child.wait()?;
    read?;
    Ok((status, String::from_utf8_lossy(&buf).into_owned()))
}
