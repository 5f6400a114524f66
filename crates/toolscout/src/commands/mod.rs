//! Command implementations.

mod discover;
mod resolve;

pub use discover::run as discover;
pub use resolve::run as resolve;

use crate::cli::Cli;
use toolscout_core::ToolsetLocator;
use toolscout_engine::{DEFAULT_ENGINE_VERSIONS, InstallRootLoader, LegacyEngineToolsets};
use toolscout_setup::{DirSetupConfiguration, SetupConfiguration, SideBySideToolsets};

/// Wire the locator from the CLI configuration: the engine-registered source
/// first, side-by-side installations second.
pub(crate) fn build_locator(cli: &Cli) -> ToolsetLocator {
    let candidates = if cli.engine_versions.is_empty() {
        DEFAULT_ENGINE_VERSIONS
            .iter()
            .map(ToString::to_string)
            .collect()
    } else {
        cli.engine_versions.clone()
    };

    let mut locator = ToolsetLocator::new();
    locator.register(LegacyEngineToolsets::new(
        Box::new(InstallRootLoader::new(&cli.engine_root)),
        candidates,
    ));

    let configuration = DirSetupConfiguration::connect(&cli.setup_root)
        .map(|config| Box::new(config) as Box<dyn SetupConfiguration>);
    locator.register(SideBySideToolsets::new(configuration));

    locator
}
