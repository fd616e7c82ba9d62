mod cli;
mod commands;
mod infra;
mod shared;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use commands::select::{self, SelectOptions};
use shared::config;
use shared::env_var::EnvVars;
use shared::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(EnvVars::load().log.as_deref());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "tmux-selector failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(command) = &cli.command {
        return command.run();
    }

    let config = config::load_config()?;
    let options = SelectOptions::resolve(cli.format, cli.auto, cli.interactive, &config);
    select::run(&options)?;

    Ok(())
}
