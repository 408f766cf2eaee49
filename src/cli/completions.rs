use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bfprofile completions --shell bash > ~/.bash_completion.d/bfprofile\n\n\
                  Generate zsh completions:\n    bfprofile completions --shell zsh > ~/.zfunc/_bfprofile\n\n\
                  Generate fish completions:\n    bfprofile completions --shell fish > ~/.config/fish/completions/bfprofile.fish\n\n\
                  Generate PowerShell completions:\n    bfprofile completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
