//! `toolscout resolve` - find the best matching installed toolset.

use crate::cli::{Cli, EXIT_NO_MATCH, EXIT_OK};

pub fn run(cli: &Cli, version: &str) -> i32 {
    let locator = super::build_locator(cli);
    match locator.resolve_version(version) {
        Some(toolset) => {
            println!("{toolset}");
            EXIT_OK
        }
        None => {
            println!("no installed toolset matches '{version}'");
            EXIT_NO_MATCH
        }
    }
}
