pub mod cli;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod paths;

pub mod subcommands {
    pub mod simulate;
    pub mod syscheck;
}

pub mod util {
    pub mod exec;
    pub mod logging;
}
