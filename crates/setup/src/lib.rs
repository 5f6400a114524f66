//! Side-by-side installation enumeration.
//!
//! Hosts may carry toolsets installed side by side, registered with an
//! optional installation-registration service rather than with any engine
//! module. The service hands out instance descriptors through a paginated
//! enumerator with a fixed-size buffer contract; descriptors are reduced to
//! plain toolset records for the merged registry.
//!
//! The service is optional end to end: a host without it, a service without
//! an enumerator, and an enumeration that finds nothing all collapse to the
//! same "no result" outcome for the merge policy.

mod error;
pub mod dir_config;
pub mod enumerator;
pub mod instance;

pub use dir_config::DirSetupConfiguration;
pub use enumerator::{INSTANCE_BATCH, InstanceEnumerator, SetupConfiguration, SideBySideToolsets};
pub use error::{Error, Result};
pub use instance::SetupInstance;
