//! `toolscout discover` - list every installed toolset.

use crate::cli::{Cli, EXIT_OK};

pub fn run(cli: &Cli) -> i32 {
    let locator = super::build_locator(cli);
    let registry = locator.discover_toolsets();
    for toolset in &registry {
        println!("{toolset}");
    }
    println!("{} toolset(s) installed", registry.len());
    EXIT_OK
}
