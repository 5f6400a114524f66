//! Error types for setup-instance enumeration.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for setup enumeration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading instance descriptors.
///
/// These never escape enumeration: a descriptor that fails to read becomes
/// a null slot within its batch, which downstream consumers skip.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// An instance descriptor could not be read.
    #[error("failed to read instance descriptor {path}", path = .path.display())]
    #[diagnostic(code(toolscout_setup::instance::io))]
    DescriptorIo {
        /// Path of the descriptor that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An instance descriptor is not a valid descriptor document.
    #[error("instance descriptor {path} is malformed", path = .path.display())]
    #[diagnostic(code(toolscout_setup::instance::malformed))]
    DescriptorParse {
        /// Path of the malformed descriptor.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
