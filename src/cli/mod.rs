pub mod logging;
pub mod output;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Read inputs line by line from `path`.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    Ok(content.lines().map(str::to_string).collect())
}

pub fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read from stdin")
}

/// Drop empty and whitespace-only lines.
pub fn drop_blank(lines: Vec<String>) -> Vec<String> {
    lines.into_iter().filter(|l| !l.trim().is_empty()).collect()
}
