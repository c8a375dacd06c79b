use fotos_release_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Release runners may not have a writable state dir; stderr is fine there.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        tracing::error!("{:#}", err);
        eprintln!("fotos-release error: {:#}", err);
        std::process::exit(1);
    }
}
