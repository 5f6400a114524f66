//! Installed-instance descriptors reported by the registration service.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use toolscout_core::Toolset;

/// Descriptor of one side-by-side installed instance.
///
/// Richer than a [`Toolset`]: the registration service records identity and
/// display metadata the locator does not need. [`SetupInstance::to_toolset`]
/// reduces the descriptor to the (version, path) pair the registry holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupInstance {
    /// Stable identifier assigned by the registration service.
    pub instance_id: String,
    /// Version of the installed product.
    pub installation_version: String,
    /// Root directory of the installation.
    pub installation_path: PathBuf,
    /// Human-readable product name, when the service recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl SetupInstance {
    /// Reduce this descriptor to its toolset record.
    #[must_use]
    pub fn to_toolset(&self) -> Toolset {
        Toolset::new(
            self.installation_version.clone(),
            self.installation_path.clone(),
        )
    }
}
