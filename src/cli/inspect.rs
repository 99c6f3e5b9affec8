//! Inspect command implementation.
//!
//! Parses one level file and prints a summary, or the full level as JSON.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{LevelError, Result};
use crate::loader::load_file;
use crate::types::Level;

/// Parse a level file and print its contents
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Level file to inspect
    pub file: PathBuf,

    /// Print the parsed level as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let level = load_file(&args.file)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&level)
            .map_err(|e| LevelError::format(format!("failed to render JSON: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    print_summary(&args.file, &level);
    Ok(())
}

fn print_summary(file: &Path, level: &Level) {
    println!("{}", file.display());

    match level {
        Level::TwoD(level) => {
            println!("  dimension: 2D");
            println!("  spawn:     {}", level.spawn);
            println!("  scroll:    {}", level.scroll);
        }
        Level::ThreeD(level) => {
            println!("  dimension: 3D");
            println!("  spawn:     {}", level.spawn);
        }
    }

    println!("  blocks:    {}", level.block_count());

    let mut headers: Vec<_> = level.headers().iter().collect();
    headers.sort_by_key(|(k, _)| k.as_str());
    println!("  headers:");
    for (key, value) in headers {
        println!("    @{} {}", key, value);
    }
}
