//! Toolset registry and version resolution.
//!
//! A host may carry installed build-engine toolsets registered in two
//! independent places: the engine modules' own toolset collections and the
//! host's side-by-side installation registration service. Either source can
//! be partially or fully unavailable. This crate merges whatever both report
//! into one registry and resolves a caller-supplied version string against it
//! with a two-tier match policy (exact string, then major/minor).
//!
//! # Architecture
//!
//! - [`Toolset`] - the (version, path) record every source reduces to
//! - [`ToolsetSource`] - trait implemented by each enumeration source
//! - [`Enumeration`] - a source's tagged outcome (`Absent` vs `Found`)
//! - [`ToolsetLocator`] - ordered source registration, merge, resolution
//! - [`resolve`] - normalization and the tiered match policy
//!
//! # Example
//!
//! ```
//! use toolscout_core::{Enumeration, Toolset, ToolsetLocator, ToolsetSource};
//!
//! struct Fixed(Vec<Toolset>);
//!
//! impl ToolsetSource for Fixed {
//!     fn name(&self) -> &'static str {
//!         "fixed"
//!     }
//!
//!     fn enumerate(&self) -> Enumeration {
//!         Enumeration::Found(self.0.clone())
//!     }
//! }
//!
//! let mut locator = ToolsetLocator::new();
//! locator.register(Fixed(vec![Toolset::new("12.0", "/opt/engine/12")]));
//! let toolset = locator.resolve_version("12").unwrap();
//! assert_eq!(toolset.version, "12.0");
//! ```

pub mod locator;
pub mod resolve;
pub mod source;
pub mod toolset;

pub use locator::ToolsetLocator;
pub use resolve::{DottedVersion, normalize_version, select_toolset};
pub use source::{Enumeration, ToolsetSource};
pub use toolset::Toolset;
