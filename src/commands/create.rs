//! Profile create command implementation
//!
//! Builds a profile from option tokens and writes it to disk.

use console::Style;

use crate::catalog::OptionCatalog;
use crate::cli::CreateArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::profile::Profile;

/// Run profile create command
pub fn run(catalog: &OptionCatalog, args: CreateArgs) -> Result<()> {
    let profile = build_profile(catalog, &args)?;
    profile.save(&args.file)?;

    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Created profile"),
        args.file.display()
    );
    Ok(())
}

fn build_profile<'c>(catalog: &'c OptionCatalog, args: &CreateArgs) -> Result<Profile<'c>> {
    let mut profile = Profile::new(catalog);
    helpers::apply_tokens(&mut profile, &args.configure)?;

    if let Some(name) = &args.switch_profile {
        profile.set_switch_profile(name.as_str())?;
    }
    for program in args.p4_examples.iter().map(|p| p.trim()) {
        if !program.is_empty() {
            profile.add_p4_program(program);
        }
    }
    if let Some(path) = &args.bsp_path {
        profile.set_bsp_path(path.as_str())?;
    }
    Ok(profile)
}
