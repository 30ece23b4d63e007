// vaultmask/src/main.rs
//! vaultmask entry point.
//!
//! Resolves the vault, builds one redaction pipeline for the process and
//! dispatches to the chosen subcommand. Exit codes: 0 on success, 2 when
//! redaction was refused (fail-closed), 1 for any other error.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use vaultmask::cli::{Cli, Commands};
use vaultmask::commands::{error_msg, redact, roundtrip, scan};
use vaultmask::logger;
use vaultmask::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use vaultmask::utils::input::read_input;
use vaultmask::utils::vault_source::resolve_vault;
use vaultmask_core::{RedactionPipeline, VaultmaskError};

fn main() -> ExitCode {
    // A missing .env is fine; VAULTMASK_VAULT may also come from the shell.
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    info!("vaultmask started. Version: {}", env!("CARGO_PKG_VERSION"));
    debug!(".env file loaded: {}", dotenv_loaded);

    // Built before anything else so every error below prints in the user's theme.
    let theme = match build_theme_map(cli.theme.as_deref()).context("Failed to load theme") {
        Ok(theme) => theme,
        Err(e) => {
            error_msg(format!("{:#}", e), &ThemeStyle::default_theme_map());
            return ExitCode::FAILURE;
        }
    };

    match run(cli, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let fail_closed = e
                .downcast_ref::<VaultmaskError>()
                .is_some_and(VaultmaskError::is_fail_closed);
            if fail_closed {
                ExitCode::from(2)
            } else {
                error_msg(format!("{:#}", e), &theme);
                ExitCode::FAILURE
            }
        }
    }
}

fn run(cli: Cli, theme: &ThemeMap) -> Result<()> {
    let vault = resolve_vault(cli.vault.as_deref(), &cli.entries)?;
    let mut pipeline = RedactionPipeline::new(vault)?;
    for (category, count) in pipeline.engine().get_vault().category_counts() {
        info!("Vault: {} {} entr{}.", count, category, if count == 1 { "y" } else { "ies" });
    }

    match cli.command {
        Commands::Redact(cmd) => {
            let input = read_input(cmd.input_file.as_deref())?;
            let opts = redact::RedactOptions {
                input,
                output_path: cmd.output,
                diff: cmd.diff,
                no_summary: cmd.no_summary,
                quiet: cli.quiet,
            };
            redact::run_redact(&mut pipeline, opts, theme)
        }
        Commands::Scan(cmd) => {
            let input = read_input(cmd.input_file.as_deref())?;
            scan::run_scan(&pipeline, &input, cmd.json, theme)
        }
        Commands::Roundtrip(cmd) => {
            let input = read_input(cmd.input_file.as_deref())?;
            roundtrip::run_roundtrip(&mut pipeline, &input, &cmd.command, theme)
        }
    }
}
