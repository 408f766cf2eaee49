//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - profile: `profile create`, `profile describe` and `profile apply`
//! - options: catalog listing arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod options;
pub mod profile;

pub use completions::CompletionsArgs;
pub use options::OptionsArgs;
pub use profile::{ApplyArgs, CreateArgs, DescribeArgs, ProfileArgs, ProfileCommand};

/// Studio tool invoked when `--studio` is not given
pub const DEFAULT_STUDIO: &str = "p4studio";

/// bfprofile - build profile resolver
///
/// Turn a declarative build profile into the install, configure and build
/// steps of the studio tool.
#[derive(Parser, Debug)]
#[command(
    name = "bfprofile",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve declarative build profiles into studio build steps",
    long_about = "bfprofile validates a build profile (global options, features, target \
                  architectures and programs), resolves the final option set and drives \
                  the studio tool through dependency install, configure and build.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bfprofile profile create --configure tofino,switch profile.yaml   \x1b[90m# Write a new profile\x1b[0m\n   \
                  bfprofile profile describe profile.yaml                          \x1b[90m# Show resolved options\x1b[0m\n   \
                  bfprofile profile apply --jobs 8 profile.yaml                    \x1b[90m# Install, configure and build\x1b[0m\n   \
                  bfprofile options                                                \x1b[90m# List known options\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Option catalog to use instead of the built-in one
    #[arg(long, global = true, env = "BFPROFILE_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Studio tool that runs the build stages
    #[arg(
        long,
        global = true,
        env = "BFPROFILE_STUDIO",
        default_value = DEFAULT_STUDIO,
        value_name = "PROGRAM"
    )]
    pub studio: String,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, inspect and apply build profiles
    Profile(ProfileArgs),

    /// List the options known to the catalog
    Options(OptionsArgs),

    /// Print the JSON Schema of profile documents
    Schema,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
