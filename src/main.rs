use std::process::ExitCode;

use clap::Parser;

use hello::cli::Cli;
use hello::config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    config::init_tracing(config::get_log_level());

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Greeting failed");
            eprintln!("An error occurred: {err:#}");
            ExitCode::FAILURE
        }
    }
}
