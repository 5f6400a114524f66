//! toolscout CLI binary.
//!
//! Discovers installed build-engine toolsets from the engine modules and the
//! host's side-by-side registration service, and resolves version strings
//! against the merged registry.

// The binary reports results on stdout; diagnostics go through tracing.
#![allow(clippy::print_stdout)]

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    // Diagnostics are opt-in via RUST_LOG and go to stderr so stdout stays
    // machine-readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let exit_code = match &cli.command {
        Command::Discover => commands::discover(&cli),
        Command::Resolve { version } => commands::resolve(&cli, version),
    };
    std::process::exit(exit_code);
}
