// vaultmask/src/utils/input.rs
//! Reading command input and writing command output.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads the whole input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            debug!("Read {} bytes from stdin.", buffer.len());
            Ok(buffer)
        }
    }
}

/// Writes `text` and ends it with exactly one trailing newline.
pub fn write_text<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    if text.is_empty() || text.ends_with('\n') {
        write!(writer, "{}", text)
    } else {
        writeln!(writer, "{}", text)
    }
}
