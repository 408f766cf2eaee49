//! Version command implementation

use crate::catalog::OptionCatalog;
use crate::error::Result;

/// Run version command
pub fn run(catalog: &OptionCatalog) -> Result<()> {
    println!("bfprofile {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Catalog options: {}", catalog.definitions().len());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
