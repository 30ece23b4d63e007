// vaultmask/src/logger.rs
//! `env_logger` setup shared by the binary and the integration tests.
//!
//! Records are written to stderr as `[LEVEL target] message` so stdout stays
//! reserved for redacted or restored text.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global logger once. `RUST_LOG` is honoured unless
/// `level_override` is given, in which case it wins.
pub fn init_logger(level_override: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
        if let Some(level) = level_override {
            builder.filter_level(level);
        }
        builder.format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        });
        // A test harness may already have installed one.
        let _ = builder.try_init();
    });
}

/// Chooses the override implied by `--quiet` / `--debug`.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_beats_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }

    #[test]
    fn init_is_idempotent() {
        init_logger(Some(LevelFilter::Debug));
        init_logger(None);
        log::debug!("logger initialised twice without panicking");
    }
}
