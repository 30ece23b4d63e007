//! `vaultmask scan`: count vault values in the input without changing it.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};

use vaultmask_core::{RedactionPipeline, SummaryReport, VaultmaskError};

use crate::commands::refuse;
use crate::ui::redaction_summary;
use crate::ui::theme::ThemeMap;

pub fn run_scan(pipeline: &RedactionPipeline, input: &str, json: bool, theme: &ThemeMap) -> Result<()> {
    info!("Starting scan operation.");
    let engine = pipeline.engine();
    if engine.prepared_entries().is_empty() {
        return Err(refuse(VaultmaskError::Unconfigured, theme));
    }

    let report = SummaryReport::new(engine.analyze_for_stats(input));
    info!("Scan found {} occurrence(s).", report.total_occurrences);

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if json {
        // JSON carries sample hashes, never raw values.
        let body = report.to_json().context("Failed to serialize scan report")?;
        writeln!(writer, "{}", body)?;
    } else {
        redaction_summary::print_summary(&report.categories, &mut writer, theme, supports_color, false)?;
    }
    writer.flush()?;
    Ok(())
}
