use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

use mixmol::split_ingredient_list;

use crate::cli::IoOptions;

/// Returns `true` if stdin is a terminal (interactive).
pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

/// Resolves the ingredient lines for a command: positional arguments win,
/// then the input file, then stdin.
pub fn read_ingredients(io_opts: &IoOptions) -> Result<Vec<String>> {
    if !io_opts.ingredients.is_empty() {
        return Ok(io_opts.ingredients.clone());
    }

    let raw = match &io_opts.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            if stdin_is_tty() {
                bail!(
                    "No ingredients specified and stdin is a terminal.\n\nPass ingredient lines as arguments, via --input, or pipe them to stdin."
                );
            }
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let trimmed = raw.trim();
    // A JSON array body covers the whole input; otherwise one line per item.
    let lines = if trimmed.starts_with('[') {
        split_ingredient_list(trimmed)
    } else {
        trimmed
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    };
    Ok(lines)
}

/// Opens the output sink: the given file, or stdout when none is set.
pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let file = File::create(p)
                .with_context(|| format!("Failed to create output file: {}", p.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
