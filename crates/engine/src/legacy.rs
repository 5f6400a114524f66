//! The legacy (engine-registered) toolset source.

use crate::loader::{Engine, EngineLoader, load_first};
use toolscout_core::{Enumeration, ToolsetSource};
use tracing::debug;

/// Enumerates the toolsets registered with the first loadable engine module.
///
/// Always reports [`Enumeration::Found`]: a host where no candidate loads,
/// or where the loaded engine registers nothing, reads as an engine with an
/// empty toolset list. The engine handle lives only for the duration of one
/// `enumerate` call and is dropped as soon as its collection has been read.
pub struct LegacyEngineToolsets {
    loader: Box<dyn EngineLoader>,
    candidates: Vec<String>,
}

impl LegacyEngineToolsets {
    /// Create a legacy source trying `candidates` in order.
    #[must_use]
    pub fn new(loader: Box<dyn EngineLoader>, candidates: Vec<String>) -> Self {
        Self { loader, candidates }
    }
}

impl ToolsetSource for LegacyEngineToolsets {
    fn name(&self) -> &'static str {
        "engine"
    }

    fn enumerate(&self) -> Enumeration {
        let toolsets = match load_first(self.loader.as_ref(), &self.candidates) {
            Some(engine) => engine.toolsets(),
            None => {
                debug!("no engine candidate loaded");
                Vec::new()
            }
        };
        Enumeration::Found(toolsets)
    }
}
