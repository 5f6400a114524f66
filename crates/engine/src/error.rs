//! Error types for engine module loading.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while locating or reading an engine module.
///
/// None of these escape enumeration: [`crate::load_first`] collapses every
/// load failure into an exhausted candidate.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The requested engine version is not installed.
    #[error("engine version '{version}' is not installed under {root}", root = .root.display())]
    #[diagnostic(code(toolscout_engine::load::not_installed))]
    NotInstalled {
        /// The candidate version that was requested.
        version: String,
        /// The install root that was searched.
        root: PathBuf,
    },

    /// The engine module manifest could not be read.
    #[error("failed to read engine manifest {path}", path = .path.display())]
    #[diagnostic(code(toolscout_engine::load::io))]
    ManifestIo {
        /// Path of the manifest that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The engine module manifest is not valid JSON.
    #[error("engine manifest {path} is not valid JSON", path = .path.display())]
    #[diagnostic(code(toolscout_engine::load::manifest))]
    ManifestParse {
        /// Path of the malformed manifest.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
