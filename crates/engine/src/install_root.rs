//! Filesystem-backed engine modules.
//!
//! An install root holds one directory per engine version, each carrying an
//! `engine.json` manifest that records the module's registered toolsets:
//!
//! ```json
//! {
//!   "toolsets": [
//!     { "version": "4.0", "path": "/opt/buildengine/4/bin" }
//!   ]
//! }
//! ```
//!
//! The `toolsets` key is probed dynamically rather than deserialized into a
//! fixed shape: engine generations disagree on the manifest layout, so a
//! missing or differently shaped collection reads as empty.

use crate::loader::{Engine, EngineLoader};
use crate::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use toolscout_core::Toolset;
use tracing::debug;

/// Manifest file name inside each versioned engine directory.
pub const ENGINE_MANIFEST: &str = "engine.json";

/// Loads engine modules from a directory of versioned installs.
#[derive(Debug, Clone)]
pub struct InstallRootLoader {
    root: PathBuf,
}

impl InstallRootLoader {
    /// Create a loader over `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl EngineLoader for InstallRootLoader {
    fn load(&self, version: &str) -> Result<Box<dyn Engine>> {
        let manifest_path = self.root.join(version).join(ENGINE_MANIFEST);
        if !manifest_path.is_file() {
            return Err(Error::NotInstalled {
                version: version.to_string(),
                root: self.root.clone(),
            });
        }
        let raw = fs::read_to_string(&manifest_path).map_err(|source| Error::ManifestIo {
            path: manifest_path.clone(),
            source,
        })?;
        let manifest: Value = serde_json::from_str(&raw).map_err(|source| Error::ManifestParse {
            path: manifest_path,
            source,
        })?;
        Ok(Box::new(LoadedEngine { manifest }))
    }
}

/// An engine module held open as its parsed manifest.
///
/// Dropping the handle releases the module.
pub struct LoadedEngine {
    manifest: Value,
}

impl Engine for LoadedEngine {
    fn toolsets(&self) -> Vec<Toolset> {
        let Some(registered) = self.manifest.get("toolsets").and_then(Value::as_array) else {
            debug!("engine manifest exposes no toolset collection");
            return Vec::new();
        };

        let mut toolsets = Vec::new();
        for entry in registered {
            match (
                entry.get("version").and_then(Value::as_str),
                entry.get("path").and_then(Value::as_str),
            ) {
                (Some(version), Some(path)) => toolsets.push(Toolset::new(version, path)),
                _ => debug!("skipping engine toolset entry without version/path"),
            }
        }
        toolsets
    }
}
