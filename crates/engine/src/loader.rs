//! Candidate-ordered engine loading.

use crate::Result;
use toolscout_core::Toolset;
use tracing::debug;

/// Engine versions to try loading, highest compatibility priority first.
///
/// Pure configuration: callers pass their candidate list explicitly and may
/// substitute another one; this is only the conventional default.
pub const DEFAULT_ENGINE_VERSIONS: &[&str] = &["14", "12", "4"];

/// A loaded engine module.
///
/// The handle owns whatever host resources the module allocated; dropping it
/// releases them. Implementations read the module's registered toolset
/// collection best-effort: a missing or unrecognizable collection yields an
/// empty list, never an error.
pub trait Engine {
    /// The toolsets registered with this engine module, in registration
    /// order, each (version, path) copied verbatim from the module's report.
    fn toolsets(&self) -> Vec<Toolset>;
}

/// Loads engine modules by version identifier.
pub trait EngineLoader {
    /// Attempt to load the engine module for `version`.
    ///
    /// # Errors
    ///
    /// Any failure to locate or read the module. Callers walking a candidate
    /// list treat an error as an exhausted candidate, not a fault.
    fn load(&self, version: &str) -> Result<Box<dyn Engine>>;
}

/// Load the first candidate engine version that is actually present.
///
/// Candidates are tried in order; individual load failures are logged and
/// swallowed. `None` means every candidate failed.
pub fn load_first<S: AsRef<str>>(
    loader: &dyn EngineLoader,
    candidates: &[S],
) -> Option<Box<dyn Engine>> {
    for candidate in candidates {
        let version = candidate.as_ref();
        match loader.load(version) {
            Ok(engine) => {
                debug!(%version, "loaded engine module");
                return Some(engine);
            }
            Err(error) => {
                debug!(%version, %error, "engine candidate failed to load");
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct FixedEngine(Vec<Toolset>);

    impl Engine for FixedEngine {
        fn toolsets(&self) -> Vec<Toolset> {
            self.0.clone()
        }
    }

    /// Loader that only knows one version and records every attempt.
    struct SingleVersionLoader {
        known: &'static str,
        attempts: RefCell<Vec<String>>,
    }

    impl EngineLoader for SingleVersionLoader {
        fn load(&self, version: &str) -> Result<Box<dyn Engine>> {
            self.attempts.borrow_mut().push(version.to_string());
            if version == self.known {
                Ok(Box::new(FixedEngine(vec![Toolset::new("4.0", "/opt/4")])))
            } else {
                Err(Error::NotInstalled {
                    version: version.to_string(),
                    root: PathBuf::from("/opt"),
                })
            }
        }
    }

    #[test]
    fn test_load_first_stops_at_first_loadable_candidate() {
        let loader = SingleVersionLoader {
            known: "12",
            attempts: RefCell::new(Vec::new()),
        };
        let engine = load_first(&loader, DEFAULT_ENGINE_VERSIONS);
        assert!(engine.is_some());
        assert_eq!(*loader.attempts.borrow(), ["14", "12"]);
    }

    #[test]
    fn test_load_first_exhausts_all_candidates() {
        let loader = SingleVersionLoader {
            known: "2",
            attempts: RefCell::new(Vec::new()),
        };
        assert!(load_first(&loader, DEFAULT_ENGINE_VERSIONS).is_none());
        assert_eq!(*loader.attempts.borrow(), ["14", "12", "4"]);
    }

    #[test]
    fn test_load_first_with_no_candidates_is_none() {
        let loader = SingleVersionLoader {
            known: "14",
            attempts: RefCell::new(Vec::new()),
        };
        assert!(load_first(&loader, &[] as &[&str]).is_none());
    }
}
