use clap::Parser;

/// Arguments for the options command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every option:\n    bfprofile options\n\n\
                  List the sub-options of one feature:\n    bfprofile options --category switch\n\n\
                  List options of a custom catalog:\n    bfprofile --catalog ./options.yaml options")]
pub struct OptionsArgs {
    /// Only list options of this category (global, architecture or a feature name)
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}
