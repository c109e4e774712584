//! jwt-mint: sign and verify HS256 JSON Web Tokens from the command line.
//!
//! Entry point for the application. Parses CLI arguments, installs the
//! log subscriber, and delegates to the appropriate command handler.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod display;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use jwt_mint::JwtError;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.chain().find_map(|cause| cause.downcast_ref::<JwtError>()) {
                Some(jwt) => eprintln!("Error: {}: {e:#}", jwt.key()),
                None => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr. `--verbose` forces `debug`; otherwise `RUST_LOG`, then `warn`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

/// Dispatch to the appropriate command handler.
///
/// Returns instead of calling `process::exit` so that destructors
/// (including `Zeroizing` secrets) run.
fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Sign(args) => commands::sign::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
        Commands::ParseTime(args) => commands::parse_time::execute(args),
    }
}
