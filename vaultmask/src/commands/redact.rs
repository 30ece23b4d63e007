//! `vaultmask redact`: replace vault values with nonces.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use vaultmask_core::RedactionPipeline;

use crate::commands::{info_msg, refuse, success_msg};
use crate::ui::theme::ThemeMap;
use crate::ui::{diff_viewer, redaction_summary};
use crate::utils::input::write_text;

pub struct RedactOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub diff: bool,
    pub no_summary: bool,
    pub quiet: bool,
}

pub fn run_redact(pipeline: &mut RedactionPipeline, opts: RedactOptions, theme: &ThemeMap) -> Result<()> {
    info!("Starting redact operation.");

    let redacted = pipeline.try_redact(&opts.input).map_err(|e| refuse(e, theme))?;
    debug!(
        "Content redacted. Original length: {}, redacted length: {}",
        opts.input.len(),
        redacted.len()
    );

    handle_primary_output(&opts, &redacted, theme)?;

    if !opts.no_summary && !opts.quiet {
        let supports_color = io::stderr().is_terminal();
        redaction_summary::print_summary(pipeline.last_summary(), &mut io::stderr(), theme, supports_color, true)?;
    }

    info!("Redact operation completed.");
    Ok(())
}

fn handle_primary_output(opts: &RedactOptions, redacted: &str, theme: &ThemeMap) -> Result<()> {
    match &opts.output_path {
        Some(path) => {
            if !opts.quiet {
                info_msg(format!("Writing redacted content to file: {}", path.display()), theme);
            }
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            if opts.diff {
                diff_viewer::print_diff(&opts.input, redacted, &mut file, theme, false)?;
            } else {
                write_text(&mut file, redacted)?;
            }
            if !opts.quiet {
                success_msg("Redacted content written.", theme);
            }
        }
        None => {
            debug!("Writing redacted content to stdout.");
            let stdout = io::stdout();
            let supports_color = stdout.is_terminal();
            let mut writer = stdout.lock();
            if opts.diff {
                diff_viewer::print_diff(&opts.input, redacted, &mut writer, theme, supports_color)?;
            } else {
                write_text(&mut writer, redacted)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
