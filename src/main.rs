//! bfprofile - build profile resolver
//!
//! Validates declarative build profiles against an option catalog, resolves
//! the final option set and drives the studio tool through dependency
//! install, configure and build.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod error;
mod logging;
mod plan;
mod profile;
mod resolver;
mod schema;

use catalog::OptionCatalog;
use cli::{Cli, Commands, ProfileCommand};
use error::Result;

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        // Completions never need the catalog
        Commands::Completions(args) => commands::completions::run(args),
        command => {
            let catalog = commands::helpers::load_catalog(cli.catalog.as_deref())?;
            tracing::debug!(options = catalog.definitions().len(), "catalog loaded");
            dispatch(&catalog, &cli.studio, command)
        }
    }
}

fn dispatch(catalog: &OptionCatalog, studio: &str, command: Commands) -> Result<()> {
    match command {
        Commands::Profile(args) => match args.command {
            ProfileCommand::Create(args) => commands::create::run(catalog, args),
            ProfileCommand::Describe(args) => commands::describe::run(catalog, studio, args),
            ProfileCommand::Apply(args) => commands::apply::run(catalog, studio, args),
        },
        Commands::Options(args) => commands::options::run(catalog, args),
        Commands::Schema => commands::schema::run(catalog),
        Commands::Version => commands::version::run(catalog),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
