//! Hand-off to the external build stages
//!
//! Stages run strictly one after another: system check, dependency install,
//! configure, build. Each call blocks until the stage finishes, and the first
//! failure stops the pipeline.

use std::process::Command;

use super::args::{BuildArgs, CheckSystemArgs, CommandArgs, ConfigureArgs, InstallArgs, render_command};
use super::ExecutionPlan;
use crate::error::{self, Result};

/// Consumer of the argument bundles
pub trait StageRunner {
    fn check_system(&mut self, args: &CheckSystemArgs) -> Result<()>;

    fn install(&mut self, args: &InstallArgs) -> Result<()>;

    fn configure(&mut self, args: &ConfigureArgs) -> Result<()>;

    fn build(&mut self, args: &BuildArgs) -> Result<()>;
}

/// Which optional stages to leave out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub skip_system_check: bool,
    pub skip_dependencies: bool,
}

/// Drive a runner through every stage of the plan
pub fn run_pipeline(
    plan: &ExecutionPlan<'_, '_>,
    runner: &mut dyn StageRunner,
    options: RunOptions,
) -> Result<()> {
    if options.skip_system_check {
        tracing::info!("skipping system check");
    } else {
        tracing::info!("checking system");
        runner.check_system(&plan.check_system_args())?;
    }

    if options.skip_dependencies {
        tracing::info!("skipping dependency install");
    } else {
        let args = plan.dependencies_install_args();
        tracing::info!(packages = %args.source_packages, "installing dependencies");
        runner.install(&args)?;
    }

    let args = plan.configure_args();
    tracing::info!(options = args.options.len(), "configuring");
    runner.configure(&args)?;

    let args = plan.build_args();
    tracing::info!(targets = ?args.targets, "building");
    runner.build(&args)
}

/// Runs each stage as `<program> <stage args...>`
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, bundle: &dyn CommandArgs) -> Result<()> {
        let args = bundle.to_args();
        tracing::debug!(command = %render_command(&self.program, &args), "spawning");

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|e| error::stage_failed(bundle.stage(), format!("{}: {e}", self.program)))?;

        if status.success() {
            Ok(())
        } else {
            let reason = match status.code() {
                Some(code) => format!("{} exited with status {code}", self.program),
                None => format!("{} was terminated by a signal", self.program),
            };
            Err(error::stage_failed(bundle.stage(), reason))
        }
    }
}

impl StageRunner for ProcessRunner {
    fn check_system(&mut self, args: &CheckSystemArgs) -> Result<()> {
        self.run(args)
    }

    fn install(&mut self, args: &InstallArgs) -> Result<()> {
        self.run(args)
    }

    fn configure(&mut self, args: &ConfigureArgs) -> Result<()> {
        self.run(args)
    }

    fn build(&mut self, args: &BuildArgs) -> Result<()> {
        self.run(args)
    }
}

/// Prints the command lines instead of running them
#[derive(Debug, Clone)]
pub struct DryRunner {
    program: String,
}

impl DryRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn print(&self, bundle: &dyn CommandArgs) {
        println!("{}", render_command(&self.program, &bundle.to_args()));
    }
}

impl StageRunner for DryRunner {
    fn check_system(&mut self, args: &CheckSystemArgs) -> Result<()> {
        self.print(args);
        Ok(())
    }

    fn install(&mut self, args: &InstallArgs) -> Result<()> {
        self.print(args);
        Ok(())
    }

    fn configure(&mut self, args: &ConfigureArgs) -> Result<()> {
        self.print(args);
        Ok(())
    }

    fn build(&mut self, args: &BuildArgs) -> Result<()> {
        self.print(args);
        Ok(())
    }
}
