//! Engine module loading and legacy toolset enumeration.
//!
//! A build engine ships as versioned, independently installed modules, and
//! each loaded module can report the toolsets registered with it. This crate
//! walks an ordered candidate list of engine versions, loads the first one
//! that is actually present, reads its registered toolset collection
//! best-effort, and exposes the result as a
//! [`ToolsetSource`](toolscout_core::ToolsetSource).
//!
//! Load failures are not errors to the enumeration: a candidate that fails
//! for any reason is simply exhausted, and an engine whose toolset
//! collection is missing or unrecognizable reads as an engine with no
//! registered toolsets.

mod error;
pub mod install_root;
pub mod legacy;
pub mod loader;

pub use error::{Error, Result};
pub use install_root::InstallRootLoader;
pub use legacy::LegacyEngineToolsets;
pub use loader::{DEFAULT_ENGINE_VERSIONS, Engine, EngineLoader, load_first};
