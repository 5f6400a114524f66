//! Command-line surface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Exit code when the requested operation succeeded.
pub const EXIT_OK: i32 = 0;
/// Exit code when no installed toolset matched the requested version.
pub const EXIT_NO_MATCH: i32 = 1;

/// Locate installed build-engine toolsets and resolve version strings.
#[derive(Debug, Parser)]
#[command(name = "toolscout", version, about)]
pub struct Cli {
    /// Root directory of versioned engine installs.
    #[arg(
        long,
        env = "TOOLSCOUT_ENGINE_ROOT",
        default_value = "/opt/buildengine",
        global = true
    )]
    pub engine_root: PathBuf,

    /// Root directory of the side-by-side registration service.
    #[arg(
        long,
        env = "TOOLSCOUT_SETUP_ROOT",
        default_value = "/var/lib/buildengine/setup",
        global = true
    )]
    pub setup_root: PathBuf,

    /// Engine version to try loading, highest priority first. Repeatable;
    /// defaults to 14, 12, 4.
    #[arg(long = "engine-version", value_name = "VERSION", global = true)]
    pub engine_versions: Vec<String>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every installed toolset from all sources.
    Discover,
    /// Resolve a version string to the best matching installed toolset.
    Resolve {
        /// Version to look up, e.g. "4", "4.0" or "14.1.2.3".
        version: String,
    },
}
