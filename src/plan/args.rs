//! Argument bundles handed to the external build stages
//!
//! Each bundle knows how to render itself as the argument vector of the
//! equivalent studio command line.

use std::collections::BTreeSet;

/// Arguments for `dependencies install`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallArgs {
    /// Comma-separated package list
    pub source_packages: String,
    pub jobs: Option<usize>,
}

/// Arguments for `configure`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureArgs {
    /// Option tokens (`opt` / `^opt`)
    pub options: BTreeSet<String>,
    pub bsp_path: Option<String>,
    pub p4ppflags: Option<String>,
    pub p4flags: Option<String>,
    pub extra_cppflags: Option<String>,
    pub kdir: Option<String>,
}

/// Arguments for `build`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArgs {
    pub targets: Vec<String>,
    pub jobs: Option<usize>,
}

/// Arguments for `check-system`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSystemArgs {
    /// Building for hardware rather than the model
    pub asic: bool,
    pub kdir: Option<String>,
}

/// Render a bundle as studio command-line arguments
pub trait CommandArgs {
    /// Name of the stage, also used in error messages
    fn stage(&self) -> &'static str;

    fn to_args(&self) -> Vec<String>;
}

impl CommandArgs for InstallArgs {
    fn stage(&self) -> &'static str {
        "dependencies install"
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "dependencies".to_string(),
            "install".to_string(),
            "--source-packages".to_string(),
            self.source_packages.clone(),
        ];
        push_jobs(&mut args, self.jobs);
        args
    }
}

impl CommandArgs for ConfigureArgs {
    fn stage(&self) -> &'static str {
        "configure"
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = vec!["configure".to_string()];
        args.extend(self.options.iter().cloned());
        push_flag(&mut args, "--bsp-path", self.bsp_path.as_deref());
        push_flag(&mut args, "--p4ppflags", self.p4ppflags.as_deref());
        push_flag(&mut args, "--p4flags", self.p4flags.as_deref());
        push_flag(&mut args, "--extra-cppflags", self.extra_cppflags.as_deref());
        push_flag(&mut args, "--kdir", self.kdir.as_deref());
        args
    }
}

impl CommandArgs for BuildArgs {
    fn stage(&self) -> &'static str {
        "build"
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = vec!["build".to_string()];
        args.extend(self.targets.iter().cloned());
        push_jobs(&mut args, self.jobs);
        args
    }
}

impl CommandArgs for CheckSystemArgs {
    fn stage(&self) -> &'static str {
        "check-system"
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = vec!["check-system".to_string()];
        if self.asic {
            args.push("--asic".to_string());
        }
        push_flag(&mut args, "--kdir", self.kdir.as_deref());
        args
    }
}

fn push_flag(args: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value {
        args.push(flag.to_string());
        args.push(value.to_string());
    }
}

fn push_jobs(args: &mut Vec<String>, jobs: Option<usize>) {
    if let Some(jobs) = jobs {
        args.push("--jobs".to_string());
        args.push(jobs.to_string());
    }
}

/// Render a full command line a user could paste into a shell
pub fn render_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(shell_quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn shell_quote(word: &str) -> String {
    let is_plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=,:^+@%".contains(c));
    if is_plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
