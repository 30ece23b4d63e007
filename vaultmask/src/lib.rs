// vaultmask/src/lib.rs
//! # vaultmask CLI Application
//!
//! Terminal front end for `vaultmask-core`: redact text against a vault of
//! known PII, scan for vault values, or run a full redact/external/restore
//! round trip through another program in a single process.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
