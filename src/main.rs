//! gramsim: random path simulation through a gramtools PRG.
//! Entry point only; see `cli` and `subcommands/*`.

use clap::CommandFactory;
use gramsim::cli::Cli;
use gramsim::error::{SimulateError, EXIT_FAILURE};
use gramsim::util::logging;

fn main() {
    let cli = <Cli as clap::Parser>::parse();
    logging::init_logging(cli.global.debug);

    if let Err(err) = cli.run() {
        match err.downcast_ref::<SimulateError>() {
            Some(SimulateError::InvalidArgument(msg)) => Cli::command()
                .error(clap::error::ErrorKind::ValueValidation, msg)
                .exit(),
            Some(e) => {
                log::error!("{err:#}");
                std::process::exit(e.exit_code());
            }
            None => {
                log::error!("{err:#}");
                std::process::exit(EXIT_FAILURE);
            }
        }
    }
}
