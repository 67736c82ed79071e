//! CLI definition and top-level dispatch.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::subcommands::{simulate::CmdSimulate, syscheck::CmdSyscheck};

#[derive(Parser, Debug)]
#[command(
    name = "gramsim",
    version,
    about = "Simulate random paths through a gramtools PRG"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub cmd: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Verbose logging; also forwarded to the gramtools backend
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to the gramtools backend (else $GRAMSIM_GRAMTOOLS_EXEC, else `gram` on PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub gramtools_exec: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample random paths through a PRG
    Simulate(CmdSimulate),

    /// Check environment and the gramtools backend
    Syscheck(CmdSyscheck),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.cmd {
            Commands::Simulate(cmd) => cmd.run(&self.global),
            Commands::Syscheck(cmd) => cmd.run(&self.global),
        }
    }
}
