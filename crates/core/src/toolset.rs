//! The toolset entity shared by every enumeration source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single installed build-engine toolset.
///
/// Records are carried exactly as the reporting source handed them over:
/// `version` is the engine's self-report and is not guaranteed to parse as a
/// dotted version, and duplicates across sources are preserved. A toolset is
/// immutable once constructed and lives only for the duration of one
/// discover-then-resolve pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolset {
    /// Version string as reported by the source. May be empty or malformed.
    pub version: String,
    /// Filesystem location of the toolset's entry point.
    pub path: PathBuf,
}

impl Toolset {
    /// Create a toolset from a source's (version, path) report.
    #[must_use]
    pub fn new(version: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            version: version.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for Toolset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version, self.path.display())
    }
}
