//! `gramsim syscheck` — environment & backend version.

use anyhow::Result;
use clap::Args;
use fs_err as fs;
use std::path::PathBuf;
use sysinfo::System;

use crate::cli::GlobalOpts;
use crate::util::exec::{self, ExecConfig};

#[derive(Args, Debug)]
pub struct CmdSyscheck {
    /// Write the report here instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

impl CmdSyscheck {
    pub fn run(self, global: &GlobalOpts) -> Result<()> {
        let report = report(global)?;
        if let Some(path) = self.out {
            serde_json::to_writer_pretty(fs::File::create(path)?, &report)?;
        } else {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Ok(())
    }
}

/// A missing backend is reported, not raised.
fn report(global: &GlobalOpts) -> Result<serde_json::Value> {
    let mut s = System::new();
    s.refresh_cpu();
    s.refresh_memory();

    let backend = match ExecConfig::resolve(global.gramtools_exec.as_deref()) {
        Ok(cfg) => {
            let version = exec::get_version(cfg.exe()).unwrap_or_else(|e| format!("error: {e}"));
            serde_json::json!({ "path": cfg.exe(), "version": version })
        }
        Err(e) => serde_json::json!({ "path": null, "error": e.to_string() }),
    };

    Ok(serde_json::json!({
        "gramsim_version": env!("CARGO_PKG_VERSION"),
        "cpus": s.cpus().len(),
        "total_memory_mb": s.total_memory() / 1024 / 1024,
        "executables": { "gramtools": backend },
    }))
}
