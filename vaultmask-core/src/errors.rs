//! errors.rs - Custom error types for the vaultmask-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! The two fail-closed kinds (`Unconfigured` and `NoActiveSession`) are turned
//! into sentinel strings at the public boundary in `headless`.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `vaultmask-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VaultmaskError {
    /// `redact` was called without any prepared PII entries.
    #[error("No PII vault entries are configured; refusing to emit unredacted text")]
    Unconfigured,

    /// `restore` was called before any successful `redact`.
    #[error("No active redaction session; nothing can be restored")]
    NoActiveSession,

    /// A vault entry or `category:value` shorthand could not be accepted.
    #[error("Invalid PII entry: {0}")]
    InvalidEntry(String),

    #[error("Failed to serialize redaction report: {0}")]
    SerializationError(String),
}

impl VaultmaskError {
    /// Returns true for the error kinds that must block output entirely.
    pub fn is_fail_closed(&self) -> bool {
        matches!(self, VaultmaskError::Unconfigured | VaultmaskError::NoActiveSession)
    }
}
