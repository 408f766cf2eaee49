use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for the profile command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a profile:\n    bfprofile profile create --configure tofino2,^tofino bfrt.yaml\n\n\
                  Describe a profile:\n    bfprofile profile describe bfrt.yaml\n\n\
                  Apply a profile:\n    bfprofile profile apply --jobs 8 bfrt.yaml")]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Write a new profile from option tokens
    Create(CreateArgs),

    /// Show what a profile resolves to
    Describe(DescribeArgs),

    /// Run the build stages described by a profile
    Apply(ApplyArgs),
}

/// Arguments for profile create
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Enable switch without SAI:\n    bfprofile profile create --configure switch,^sai --switch-profile x1_tofino switch.yaml\n\n\
                  Build two example programs:\n    bfprofile profile create --p4-examples tna_counter,tna_meter examples.yaml\n\n\
                  Target hardware:\n    bfprofile profile create --bsp-path /opt/bf-reference-bsp.tgz asic.yaml")]
pub struct CreateArgs {
    /// Profile file to write
    pub file: PathBuf,

    /// Option tokens: `name` enables, `^name` disables; comma separated, repeatable
    #[arg(long, value_name = "OPTS")]
    pub configure: Vec<String>,

    /// Switch profile to build
    #[arg(long, value_name = "NAME")]
    pub switch_profile: Option<String>,

    /// P4 example programs to build
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    pub p4_examples: Vec<String>,

    /// Board support package archive
    #[arg(long, env = "BFPROFILE_BSP_PATH", value_name = "PATH")]
    pub bsp_path: Option<String>,
}

/// Arguments for profile describe
#[derive(Parser, Debug)]
pub struct DescribeArgs {
    /// Profile file to read
    pub file: PathBuf,

    /// Board support package archive, overriding the profile
    #[arg(long, env = "BFPROFILE_BSP_PATH", value_name = "PATH")]
    pub bsp_path: Option<String>,
}

/// Arguments for profile apply
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Apply with overrides:\n    bfprofile profile apply --override-option ^grpc --override-option sai switch.yaml\n\n\
                  Reuse installed dependencies:\n    bfprofile profile apply --skip-dependencies switch.yaml\n\n\
                  Show the commands without running them:\n    bfprofile profile apply --dry-run switch.yaml")]
pub struct ApplyArgs {
    /// Profile file to read
    pub file: PathBuf,

    /// Option token applied on top of the profile (repeatable)
    #[arg(long = "override-option", value_name = "OPT")]
    pub override_options: Vec<String>,

    /// Parallel jobs for install and build (0 lets the tool decide)
    #[arg(long, short = 'j', env = "BFPROFILE_JOBS", value_name = "N")]
    pub jobs: Option<usize>,

    /// Board support package archive, overriding the profile
    #[arg(long, env = "BFPROFILE_BSP_PATH", value_name = "PATH")]
    pub bsp_path: Option<String>,

    /// Do not install dependency source packages
    #[arg(long)]
    pub skip_dependencies: bool,

    /// Do not run the system check
    #[arg(long)]
    pub skip_system_check: bool,

    /// Print the stage commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}
