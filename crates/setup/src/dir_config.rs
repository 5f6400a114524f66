//! Directory-backed registration service.
//!
//! Side-by-side installers register themselves by dropping a descriptor at
//! `<root>/instances/<instance-id>/state.json`. Connecting to the service
//! succeeds exactly when the registration root exists; enumeration walks the
//! instance directories in sorted order so results are stable across runs.

use crate::enumerator::{InstanceEnumerator, SetupConfiguration};
use crate::instance::SetupInstance;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory under the registration root holding per-instance state.
pub const INSTANCES_DIR: &str = "instances";
/// Descriptor file inside each instance directory.
pub const STATE_FILE: &str = "state.json";

/// Registration service reading instance state from a directory tree.
#[derive(Debug, Clone)]
pub struct DirSetupConfiguration {
    root: PathBuf,
}

impl DirSetupConfiguration {
    /// Connect to the service rooted at `root`.
    ///
    /// `None` when no registration root exists on this host - the caller
    /// treats that as the service being absent.
    #[must_use]
    pub fn connect(root: impl Into<PathBuf>) -> Option<Self> {
        let root = root.into();
        root.is_dir().then_some(Self { root })
    }
}

impl SetupConfiguration for DirSetupConfiguration {
    fn enum_instances(&self) -> Option<Box<dyn InstanceEnumerator>> {
        let instances_dir = self.root.join(INSTANCES_DIR);
        let entries = fs::read_dir(&instances_dir).ok()?;
        let mut descriptors: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .map(|path| path.join(STATE_FILE))
            .collect();
        descriptors.sort();
        Some(Box::new(DirInstanceEnumerator {
            descriptors,
            cursor: 0,
        }))
    }
}

fn read_instance(path: &Path) -> Result<SetupInstance> {
    let raw = fs::read_to_string(path).map_err(|source| Error::DescriptorIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::DescriptorParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Enumerator over the descriptor files found at enumeration start.
struct DirInstanceEnumerator {
    descriptors: Vec<PathBuf>,
    cursor: usize,
}

impl InstanceEnumerator for DirInstanceEnumerator {
    fn next(&mut self, buf: &mut [Option<SetupInstance>]) -> usize {
        let remaining = self.descriptors.len() - self.cursor;
        let fetched = remaining.min(buf.len());
        for slot in buf.iter_mut().take(fetched) {
            let path = &self.descriptors[self.cursor];
            self.cursor += 1;
            *slot = match read_instance(path) {
                Ok(instance) => Some(instance),
                Err(error) => {
                    // Still counted in the batch, handed back as a null slot.
                    warn!(path = %path.display(), %error, "skipping unreadable instance descriptor");
                    None
                }
            };
        }
        fetched
    }
}
