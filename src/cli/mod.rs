pub mod completions;
pub mod inspect;
pub mod validate;

use clap::{Parser, Subcommand};

/// levelz - LevelZ level format parser
#[derive(Parser, Debug)]
#[command(name = "levelz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a level file and print its contents
    Inspect(inspect::InspectArgs),

    /// Validate level files without printing them
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
