// vaultmask-core/src/engine.rs
//! Defines the core RedactionEngine trait.
//!
//! The `RedactionEngine` trait provides a pluggable interface over "a set of
//! known PII values plus the rules for finding them in text". The fail-closed
//! pipeline in `headless` and the CLI both work against this trait rather
//! than a concrete engine.
//!
//! License: MIT OR APACHE 2.0

use crate::config::VaultConfig;
use crate::errors::VaultmaskError;
use crate::preparer::CanonicalPiiEntry;
use crate::redaction_match::{PiiMatch, RedactionSummaryItem};
use crate::session::RedactionSession;

/// A trait that defines the core functionality of a redaction engine.
pub trait RedactionEngine: Send + Sync {
    /// Redacts `content`, issuing or reusing nonces from `session`.
    ///
    /// Returns the redacted text and a per-category summary. Must fail with
    /// [`VaultmaskError::Unconfigured`] rather than return `content` unchanged
    /// when the engine has nothing to match against.
    fn redact(
        &self,
        content: &str,
        session: &mut RedactionSession,
    ) -> Result<(String, Vec<RedactionSummaryItem>), VaultmaskError>;

    /// Reverses nonces issued by `session`. Never mutates the session.
    fn restore(&self, content: &str, session: &RedactionSession) -> String;

    /// Reports what would be redacted without touching any session.
    fn analyze_for_stats(&self, content: &str) -> Vec<RedactionSummaryItem>;

    /// All accepted matches, sorted by original start offset.
    fn find_matches(&self, content: &str) -> Vec<PiiMatch>;

    /// The prepared candidates, longest first.
    fn prepared_entries(&self) -> &[CanonicalPiiEntry];

    /// Returns a reference to the vault the engine was built from.
    fn get_vault(&self) -> &VaultConfig;
}
