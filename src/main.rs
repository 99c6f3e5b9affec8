use clap::Parser;
use levelz::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect(args) => levelz::cli::inspect::run(args)?,
        Commands::Validate(args) => levelz::cli::validate::run(args)?,
        Commands::Completions(args) => levelz::cli::completions::run(args)?,
    }

    Ok(())
}
