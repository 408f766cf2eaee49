//! Profile apply command implementation
//!
//! Loads a profile, applies the command-line overrides and hands the
//! resulting plan to the studio tool stage by stage.

use crate::catalog::OptionCatalog;
use crate::cli::ApplyArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::plan::runner::run_pipeline;
use crate::plan::{DryRunner, ExecutionPlan, ProcessRunner, RunOptions, StageRunner};
use crate::profile::Profile;

/// Run profile apply command
pub fn run(catalog: &OptionCatalog, studio: &str, args: ApplyArgs) -> Result<()> {
    let profile = prepare_profile(catalog, &args)?;
    let plan = ExecutionPlan::new(&profile, args.bsp_path.clone(), args.jobs);
    let options = RunOptions {
        skip_system_check: args.skip_system_check,
        skip_dependencies: args.skip_dependencies,
    };

    let mut runner: Box<dyn StageRunner> = if args.dry_run {
        Box::new(DryRunner::new(studio))
    } else {
        Box::new(ProcessRunner::new(studio))
    };
    run_pipeline(&plan, runner.as_mut(), options)?;

    tracing::info!(profile = %args.file.display(), "profile applied");
    Ok(())
}

fn prepare_profile<'c>(catalog: &'c OptionCatalog, args: &ApplyArgs) -> Result<Profile<'c>> {
    let mut profile = Profile::load(catalog, &args.file)?;
    helpers::apply_tokens(&mut profile, &args.override_options)?;
    if args.skip_dependencies {
        profile.skip_dependencies();
    }
    Ok(profile)
}
