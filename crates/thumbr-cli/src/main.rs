use thumbr_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Prefer the state-dir log file; stderr keeps the CLI usable without it.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("thumbr error: {:#}", err);
        std::process::exit(1);
    }
}
