// vaultmask/src/ui/diff_viewer.rs
//! Line diff between the input and its redacted form.
//!
//! Removed lines carry the original PII, so the diff is written to the same
//! destination the caller chose for output and never to the logs.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{color_for, ThemeEntry, ThemeMap};

/// Writes a `- original` / `+ redacted` listing of the changed lines.
pub fn print_diff<W: Write>(
    original: &str,
    redacted: &str,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, redacted);
    let header = "--- Diff View ---";
    if supports_color {
        writeln!(writer, "{}", header.color(color_for(theme, ThemeEntry::DiffHeader)))?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    let mut changed = false;
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            let (marker, text, entry) = match line {
                DiffLine::Delete(s) => ("-", *s, Some(ThemeEntry::DiffRemoved)),
                DiffLine::Insert(s) => ("+", *s, Some(ThemeEntry::DiffAdded)),
                DiffLine::Context(s) => (" ", *s, None),
            };
            changed |= entry.is_some();
            let body = format!("{} {}", marker, text.trim_end_matches('\n'));
            match entry {
                Some(entry) if supports_color => writeln!(writer, "{}", body.color(color_for(theme, entry)))?,
                _ => writeln!(writer, "{}", body)?,
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }
    writeln!(writer, "-----------------")
}
