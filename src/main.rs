//! opgen: code-generation orchestrator for Kubernetes operator projects.
//!
//! Resolves configuration once, validates the requested task, and dispatches
//! to exactly one handler. Errors are printed to stderr and mapped to exit
//! codes here and nowhere else.

mod cli;
mod commands;
pub mod component;
pub mod config;
pub mod context;
pub mod dockerfile;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod generator;
pub mod git;
mod logging;
pub mod task;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use commands::Request;
use config::Config;
use context::ProjectContext;
use error::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(exit_codes::USER_ERROR as u8))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env();
    let request = Request::from_args(cli.task.as_deref(), &cli.args)?;
    let ctx = ProjectContext::resolve(cli.root.as_deref())?;
    commands::dispatch(&request, &ctx, &config)
}
