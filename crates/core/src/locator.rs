//! Merged toolset discovery across registered sources.

use crate::resolve::select_toolset;
use crate::source::{Enumeration, ToolsetSource};
use crate::toolset::Toolset;
use tracing::{debug, info};

/// Discovers toolsets from an ordered set of sources and resolves version
/// strings against the merged registry.
///
/// Sources are enumerated in registration order and their reports
/// concatenated; nothing is deduplicated or sorted, so earlier sources win
/// ties during resolution. Every discover-then-resolve invocation is
/// self-contained - nothing is cached between calls.
#[derive(Default)]
pub struct ToolsetLocator {
    sources: Vec<Box<dyn ToolsetSource>>,
}

impl ToolsetLocator {
    /// Create a locator with no sources registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source. Registration order is merge order.
    pub fn register<S: ToolsetSource + 'static>(&mut self, source: S) {
        self.sources.push(Box::new(source));
    }

    /// Names of the registered sources, in merge order.
    #[must_use]
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Run every source and merge their reports into one registry.
    ///
    /// A source that reports [`Enumeration::Absent`] contributes nothing.
    /// This never fails, even with no sources registered or every source
    /// absent - the registry is simply empty then.
    #[must_use]
    pub fn discover_toolsets(&self) -> Vec<Toolset> {
        let mut registry = Vec::new();
        for source in &self.sources {
            match source.enumerate() {
                Enumeration::Absent => {
                    debug!(source = source.name(), "source reported no result");
                }
                Enumeration::Found(toolsets) => {
                    debug!(
                        source = source.name(),
                        count = toolsets.len(),
                        "source reported toolsets"
                    );
                    registry.extend(toolsets);
                }
            }
        }

        info!(count = registry.len(), "installed toolsets");
        for toolset in &registry {
            debug!(version = %toolset.version, path = %toolset.path.display(), "toolset");
        }
        registry
    }

    /// Discover, then resolve `user_version` against the merged registry.
    ///
    /// `None` means no installed toolset matched; the caller decides how to
    /// react. Diagnostics for the miss are emitted by the resolver.
    #[must_use]
    pub fn resolve_version(&self, user_version: &str) -> Option<Toolset> {
        let registry = self.discover_toolsets();
        let selected = select_toolset(user_version, &registry).cloned();
        if let Some(toolset) = &selected {
            info!(
                version = %toolset.version,
                path = %toolset.path.display(),
                "found matching toolset"
            );
        }
        selected
    }
}

impl std::fmt::Debug for ToolsetLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolsetLocator")
            .field("sources", &self.source_names())
            .finish()
    }
}
