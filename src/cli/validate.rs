//! Validate command implementation.
//!
//! Parses each file and reports per-file results without printing levels.

use std::path::PathBuf;

use clap::Args;

use crate::error::{LevelError, Result};
use crate::loader::load_file;

/// Validate level files without printing them
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let mut failures = 0usize;

    for file in &args.files {
        match load_file(file) {
            Ok(level) => {
                println!("ok   {} ({} blocks)", file.display(), level.block_count());
            }
            Err(e) => {
                failures += 1;
                println!("FAIL {}: {}", file.display(), e);
            }
        }
    }

    if failures > 0 {
        return Err(LevelError::format(format!(
            "{} of {} file(s) failed to parse",
            failures,
            args.files.len()
        )));
    }

    println!("Validation complete.");
    Ok(())
}
