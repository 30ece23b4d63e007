// vaultmask/src/commands/mod.rs
//! Subcommand implementations and the stderr message helpers they share.

pub mod redact;
pub mod roundtrip;
pub mod scan;

use is_terminal::IsTerminal;
use std::io;

use vaultmask_core::{fail_closed_message, VaultmaskError};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, supports_color);
}

/// Prints the sentinel for a refused operation and hands the error back so
/// the process exits non-zero.
pub(crate) fn refuse(err: VaultmaskError, theme: &ThemeMap) -> anyhow::Error {
    eprintln!("{}", fail_closed_message(&err));
    if matches!(err, VaultmaskError::Unconfigured) {
        warn_msg("Pass --vault FILE, set VAULTMASK_VAULT, or add --entry category:value.", theme);
    }
    err.into()
}
