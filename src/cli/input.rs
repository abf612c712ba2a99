//! User input utilities for interactive CLI prompts

use std::io::{self, Write};
use std::path::Path;

use crate::{Error, Result};

/// Ask the user whether an existing summary file may be overwritten
///
/// Returns `true` only on an explicit `y`/`yes`; anything else, including
/// an empty answer, declines.
pub fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!(
        "Summary file '{}' already exists. Overwrite? [y/N]: ",
        path.display()
    );
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    Ok(matches!(
        input.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
