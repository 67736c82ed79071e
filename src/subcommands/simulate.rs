//! `gramsim simulate` — sample random paths through a PRG.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::model::{self, SimulationRequest};
use crate::orchestrator::CommandOrchestrator;
use crate::util::exec::ExecConfig;

#[derive(Args, Debug)]
pub struct CmdSimulate {
    #[arg(long, value_name = "PATH", help = "A PRG as made by (or passed to) gramtools build")]
    pub prg: PathBuf,

    #[arg(
        long = "max_num_paths",
        short = 'n',
        default_value_t = model::MAX_NUM_PATHS,
        allow_negative_numbers = true,
        help = "Number of paths to simulate. Duplicates are removed, so this is an upper bound."
    )]
    pub max_num_paths: i64,

    #[arg(
        long = "sample_id",
        default_value = model::SAMPLE_ID,
        help = "Name for the sampled paths; prefixes output filenames and names their records"
    )]
    pub sample_id: String,

    #[arg(
        long = "output_dir",
        short = 'o',
        value_name = "DIR",
        default_value = model::OUTPUT_DIR,
        help = "Directory receiving the outputs"
    )]
    pub output_dir: PathBuf,

    #[arg(
        long,
        default_value_t = model::SEED,
        allow_negative_numbers = true,
        help = "Fix the seed to reproduce paths across runs (0: random)"
    )]
    pub seed: i64,
}

impl CmdSimulate {
    pub fn request(&self, debug: bool) -> Result<SimulationRequest, crate::error::SimulateError> {
        SimulationRequest::new(
            &self.prg,
            self.max_num_paths,
            &self.sample_id,
            &self.output_dir,
            self.seed,
            debug,
        )
    }

    pub fn run(self, global: &GlobalOpts) -> Result<()> {
        // Validate before anything is resolved or spawned.
        let request = self.request(global.debug)?;
        log::debug!("request: {}", serde_json::to_string(&request)?);

        let config = ExecConfig::resolve(global.gramtools_exec.as_deref())?;
        log::info!("Using gramtools backend at {}", config.exe().display());

        CommandOrchestrator::new(config).execute(&request)?;
        Ok(())
    }
}
