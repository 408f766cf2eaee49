//! Execution plan
//!
//! A read-only projection of a finished [`Profile`] into the argument
//! bundles consumed by the external build stages. Nothing here mutates the
//! profile; every bundle is recomputed on demand.

pub mod args;
pub mod runner;

use std::fmt::Write;

use crate::profile::Profile;

pub use args::{BuildArgs, CheckSystemArgs, CommandArgs, ConfigureArgs, InstallArgs};
pub use runner::{DryRunner, ProcessRunner, RunOptions, StageRunner};

/// Profile plus the command-line overrides that do not live in the document
#[derive(Debug, Clone)]
pub struct ExecutionPlan<'p, 'c> {
    profile: &'p Profile<'c>,
    bsp_path: Option<String>,
    jobs: Option<usize>,
}

impl<'p, 'c> ExecutionPlan<'p, 'c> {
    pub fn new(profile: &'p Profile<'c>, bsp_path: Option<String>, jobs: Option<usize>) -> Self {
        Self {
            profile,
            bsp_path,
            jobs,
        }
    }

    /// Explicit override, else the path recorded in the profile
    pub fn bsp_path(&self) -> Option<&str> {
        self.bsp_path.as_deref().or_else(|| self.profile.bsp_path())
    }

    /// Zero means "let the tool decide" and is never passed on
    fn jobs(&self) -> Option<usize> {
        self.jobs.filter(|&jobs| jobs > 0)
    }

    /// Human-readable summary: packages, resolved options, then targets
    pub fn describe_profile(&self) -> String {
        let packages = self.profile.source_packages();
        let options = self.profile.config_options();
        let targets = self.profile.build_targets();

        let mut out = String::new();
        let _ = writeln!(out, "Source packages:");
        if packages.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for package in &packages {
            let _ = writeln!(out, "  - {package}");
        }

        let _ = writeln!(out, "Configuration options:");
        let width = options.keys().map(String::len).max().unwrap_or(0);
        for (name, enabled) in &options {
            let state = if *enabled { "on" } else { "off" };
            let _ = writeln!(out, "  {name:<width$}  {state}");
        }

        let _ = writeln!(out, "Build targets:");
        if targets.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for target in &targets {
            let _ = writeln!(out, "  - {target}");
        }
        out
    }

    pub fn dependencies_install_args(&self) -> InstallArgs {
        InstallArgs {
            source_packages: self.profile.source_packages().join(","),
            jobs: self.jobs(),
        }
    }

    pub fn configure_args(&self) -> ConfigureArgs {
        ConfigureArgs {
            options: self.profile.config_args(),
            bsp_path: self.bsp_path().map(ToString::to_string),
            p4ppflags: self.profile.p4ppflags().map(ToString::to_string),
            p4flags: self.profile.p4flags().map(ToString::to_string),
            extra_cppflags: self.profile.extra_cppflags().map(ToString::to_string),
            kdir: self.profile.kdir().map(ToString::to_string),
        }
    }

    pub fn build_args(&self) -> BuildArgs {
        BuildArgs {
            targets: self.profile.build_targets(),
            jobs: self.jobs(),
        }
    }

    pub fn check_system_args(&self) -> CheckSystemArgs {
        CheckSystemArgs {
            asic: self.profile.is_asic(),
            kdir: self.profile.kdir().map(ToString::to_string),
        }
    }

    /// The install, configure and build stages as standalone command lines
    pub fn show_commands(&self, program: &str) -> Vec<String> {
        let install = self.dependencies_install_args();
        let configure = self.configure_args();
        let build = self.build_args();
        [
            install.to_args(),
            configure.to_args(),
            build.to_args(),
        ]
        .iter()
        .map(|args| args::render_command(program, args))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::OptionCatalog;

    fn end_to_end_profile(catalog: &OptionCatalog) -> Profile<'_> {
        Profile::from_yaml(
            catalog,
            "global-options:\n  p4ppflags: -DFOO\n\
             features:\n  switch:\n    thrift-switch: true\n\
             architectures:\n  - tofino\n",
        )
        .unwrap()
    }

    #[test]
    fn test_configure_args_carry_flags() {
        let catalog = OptionCatalog::builtin().unwrap();
        let profile = end_to_end_profile(&catalog);
        let plan = ExecutionPlan::new(&profile, None, None);

        let args = plan.configure_args();
        assert_eq!(args.p4ppflags.as_deref(), Some("-DFOO"));
        assert!(args.options.contains("tofino"));
        assert!(args.options.contains("switch"));
        assert!(args.options.contains("thrift-switch"));
        assert!(args.options.contains("^tofino2"));
        assert!(!args.options.iter().any(|t| t.contains("p4ppflags")));
        assert_eq!(args.bsp_path, None);
    }

    #[test]
    fn test_bsp_override_wins() {
        let catalog = OptionCatalog::builtin().unwrap();
        let mut profile = Profile::new(&catalog);
        profile.set_bsp_path("/opt/bsp.tgz").unwrap();

        let plan = ExecutionPlan::new(&profile, None, None);
        assert_eq!(plan.bsp_path(), Some("/opt/bsp.tgz"));

        let plan = ExecutionPlan::new(&profile, Some("/tmp/other.tgz".to_string()), None);
        assert_eq!(plan.bsp_path(), Some("/tmp/other.tgz"));
        assert_eq!(plan.configure_args().bsp_path.as_deref(), Some("/tmp/other.tgz"));
    }

    #[test]
    fn test_jobs_only_when_positive() {
        let catalog = OptionCatalog::builtin().unwrap();
        let profile = Profile::new(&catalog);

        assert_eq!(ExecutionPlan::new(&profile, None, None).build_args().jobs, None);
        assert_eq!(ExecutionPlan::new(&profile, None, Some(0)).build_args().jobs, None);
        let plan = ExecutionPlan::new(&profile, None, Some(8));
        assert_eq!(plan.build_args().jobs, Some(8));
        assert_eq!(plan.dependencies_install_args().jobs, Some(8));
    }

    #[test]
    fn test_install_args_join_packages() {
        let catalog = OptionCatalog::builtin().unwrap();
        let profile = end_to_end_profile(&catalog);
        let plan = ExecutionPlan::new(&profile, None, None);
        assert_eq!(
            plan.dependencies_install_args().source_packages,
            "bridge,libcli,thrift"
        );
    }

    #[test]
    fn test_build_args_targets() {
        let catalog = OptionCatalog::builtin().unwrap();
        let mut profile = Profile::new(&catalog);
        profile.add_p4_program("tna_counter");
        profile.set_switch_profile("x1_tofino").unwrap();

        let plan = ExecutionPlan::new(&profile, None, None);
        assert_eq!(plan.build_args().targets, vec!["tna_counter", "x1_tofino"]);
    }

    #[test]
    fn test_check_system_asic() {
        let catalog = OptionCatalog::builtin().unwrap();
        let mut profile = Profile::new(&catalog);
        assert!(!ExecutionPlan::new(&profile, None, None).check_system_args().asic);

        profile.set_bsp_path("/opt/bsp.tgz").unwrap();
        profile.set_kdir("/usr/src/linux").unwrap();
        let args = ExecutionPlan::new(&profile, None, None).check_system_args();
        assert!(args.asic);
        assert_eq!(args.kdir.as_deref(), Some("/usr/src/linux"));
    }

    #[test]
    fn test_describe_profile_sections() {
        let catalog = OptionCatalog::builtin().unwrap();
        let profile = end_to_end_profile(&catalog);
        let text = ExecutionPlan::new(&profile, None, None).describe_profile();

        let packages = text.find("Source packages:").unwrap();
        let options = text.find("Configuration options:").unwrap();
        let targets = text.find("Build targets:").unwrap();
        assert!(packages < options && options < targets);
        assert!(text.contains("- thrift"));
        assert!(text.contains("thrift-switch"));
    }

    #[test]
    fn test_show_commands_order() {
        let catalog = OptionCatalog::builtin().unwrap();
        let profile = end_to_end_profile(&catalog);
        let commands = ExecutionPlan::new(&profile, None, Some(4)).show_commands("p4studio");

        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            "p4studio dependencies install --source-packages bridge,libcli,thrift --jobs 4"
        );
        assert!(commands[1].starts_with("p4studio configure "));
        assert!(commands[1].ends_with("--p4ppflags -DFOO"));
        assert_eq!(commands[2], "p4studio build --jobs 4");
    }

    #[test]
    fn test_plan_does_not_mutate_profile() {
        let catalog = OptionCatalog::builtin().unwrap();
        let profile = end_to_end_profile(&catalog);
        let before = profile.to_yaml().unwrap();

        let plan = ExecutionPlan::new(&profile, Some("/x".to_string()), Some(2));
        let _ = plan.describe_profile();
        let _ = plan.show_commands("p4studio");
        assert_eq!(plan.configure_args(), plan.configure_args());

        assert_eq!(profile.to_yaml().unwrap(), before);
    }
}
