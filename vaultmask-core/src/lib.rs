// vaultmask-core/src/lib.rs
//! # vaultmask Core Library
//!
//! `vaultmask-core` swaps known personal data for realistic stand-ins before text
//! leaves the machine (for example on its way to a hosted LLM) and swaps it back
//! when the reply comes home. The caller supplies the sensitive values (the
//! "vault"); this is substitution, not discovery.
//!
//! Every transform is pure apart from the [`RedactionSession`] the caller passes
//! in, and the library performs no I/O besides optional vault-file loading.
//!
//! ## Modules
//!
//! * `canonical`: Comparison-only text form with a position map back to the original.
//! * `config`: `PiiEntry`, `PiiCategory` and YAML vault loading/merging.
//! * `preparer`: Expands vault entries into sorted, de-duplicated match candidates.
//! * `matcher`: Finds non-overlapping, word-boundary-aligned occurrences.
//! * `nonce`: Category-shaped synthetic replacements from reserved ranges.
//! * `session`: The per-round-trip PII <-> nonce mapping.
//! * `redactor`: `redact` and `restore`.
//! * `engine` / `engines`: The `RedactionEngine` trait and the vault-backed engine.
//! * `headless`: The fail-closed string-in/string-out boundary.
//! * `redaction_match`: Match records, summaries and PII-safe logging helpers.
//! * `validators`: Plausibility checks for vault values.
//!
//! ## Usage Example
//!
//! ```rust
//! use vaultmask_core::{PiiCategory, PiiEntry, RedactionPipeline, VaultConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let vault = VaultConfig::from_entries(vec![
//!         PiiEntry::new(PiiCategory::Name, "Ada Lovelace"),
//!         PiiEntry::new(PiiCategory::Phone, "020 7946 0018"),
//!     ]);
//!     let mut pipeline = RedactionPipeline::new(vault)?;
//!
//!     let outgoing = pipeline.redact("Call Ada Lovelace on 020 7946 0018.");
//!     assert_eq!(outgoing, "Call Avery Abernathy on 555-0100.");
//!
//!     let reply = "Sure, I'll ring Avery Abernathy at 555-0100 tomorrow.";
//!     assert_eq!(
//!         pipeline.restore(reply),
//!         "Sure, I'll ring Ada Lovelace at 020 7946 0018 tomorrow."
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Internals return [`VaultmaskError`]. The `headless` boundary turns the two
//! fail-closed kinds into the [`NO_VAULT_WARNING`] and [`NO_SESSION_WARNING`]
//! sentinels so unredacted text is never released by accident.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod canonical;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod matcher;
pub mod nonce;
pub mod preparer;
pub mod redaction_match;
pub mod redactor;
pub mod session;
pub mod validators;

/// Re-exports the canonicalizer entry points.
pub use canonical::{canonicalize, canonical_form, is_word_boundary, CanonicalText, SourceSpan};

/// Re-exports the vault configuration types and functions.
pub use config::{
    load_default_vault,
    merge_vaults,
    validate_entries,
    vault_candidate_paths,
    PiiCategory,
    PiiEntry,
    VaultConfig,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::VaultmaskError;

/// Re-exports types related to the core redaction engine trait.
pub use engine::RedactionEngine;
pub use engines::vault_engine::VaultEngine;

pub use matcher::find_pii_matches;
pub use nonce::generate_nonce;
pub use preparer::{prepare_pii_entries, CanonicalPiiEntry};
pub use redaction_match::{canonical_sample_hash, PiiMatch, RedactionSummaryItem, SummaryReport};
pub use redactor::{redact, restore};
pub use session::RedactionSession;

/// Re-exports the fail-closed boundary.
pub use headless::{
    fail_closed_message,
    headless_redact_string,
    RedactionPipeline,
    NO_SESSION_WARNING,
    NO_VAULT_WARNING,
};
