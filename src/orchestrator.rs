//! Drives one `simulate` run of the gramtools backend end to end.

use std::ffi::OsString;
use std::process::Command;
use std::time::{Duration, Instant};

use crate::error::SimulateError;
use crate::model::{InvocationResult, SimulationRequest};
use crate::paths::ResolvedPaths;
use crate::util::exec::{self, ExecConfig};
use crate::util::logging;

pub const SUBCOMMAND: &str = "simulate";

pub struct CommandOrchestrator {
    config: ExecConfig,
}

impl CommandOrchestrator {
    pub fn new(config: ExecConfig) -> Self {
        Self { config }
    }

    /// Full argument vector, executable first.
    pub fn build_invocation(
        &self,
        request: &SimulationRequest,
        paths: &ResolvedPaths,
    ) -> Vec<OsString> {
        let mut argv: Vec<OsString> = vec![
            self.config.exe().into(),
            SUBCOMMAND.into(),
            "--prg".into(),
            paths.prg.clone().into(),
            "--n".into(),
            request.max_num_paths.to_string().into(),
            "--sample_id".into(),
            request.sample_id.clone().into(),
            "--o".into(),
            paths.output_dir.clone().into(),
            "--seed".into(),
            request.seed.to_string().into(),
        ];
        if request.debug {
            argv.push("--debug".into());
        }
        argv
    }

    /// Runs the backend once and waits for it. No retries, no timeout.
    ///
    /// On failure the child's combined output is logged at error level before
    /// the error is returned; the caller only has to turn it into an exit code.
    pub fn execute(&self, request: &SimulationRequest) -> Result<(), SimulateError> {
        let paths = ResolvedPaths::resolve(&request.output_dir, &request.sample_id, &request.prg);
        let argv = self.build_invocation(request, &paths);
        log::debug!("invocation: {argv:?}");

        log::info!("Start process: simulate");
        let t0 = Instant::now();
        let result = self.invoke(argv)?;
        let elapsed = humantime::format_duration(to_millis(t0.elapsed()));

        let tool = self.tool_name();
        if !result.succeeded {
            logging::log_child_output(log::Level::Error, &result.combined_output);
            log::debug!("{tool} gave up after {elapsed}");
            return Err(SimulateError::ExternalToolFailure {
                exe: self.config.exe().to_path_buf(),
                status: result.status,
            });
        }

        logging::log_child_output(log::Level::Debug, &result.combined_output);
        log::info!("Simulated paths written under {}", paths.output_prefix().display());
        log::info!("End process: simulate ({elapsed})");
        Ok(())
    }

    fn invoke(&self, argv: Vec<OsString>) -> Result<InvocationResult, SimulateError> {
        let mut args = argv.into_iter();
        let program = args.next().unwrap_or_else(|| self.config.exe().into());
        let mut cmd = Command::new(program);
        cmd.args(args);

        let (status, combined_output) =
            exec::run_combined(cmd).map_err(|source| SimulateError::LaunchFailure {
                exe: self.config.exe().to_path_buf(),
                source,
            })?;
        Ok(InvocationResult {
            succeeded: status.success(),
            status: status.to_string(),
            combined_output,
        })
    }

    fn tool_name(&self) -> String {
        self.config
            .exe()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.config.exe().display().to_string())
    }
}

/// Drop sub-millisecond precision so elapsed times print as e.g. `1s 250ms`.
fn to_millis(d: Duration) -> Duration {
    Duration::new(d.as_secs(), d.subsec_millis() * 1_000_000)
}
