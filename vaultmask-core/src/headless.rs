// File: vaultmask-core/src/headless.rs

//! `headless.rs`
//! The fail-closed public boundary for callers that just want strings in and
//! strings out.
//!
//! Every ambiguous state resolves to "do not release text": an empty vault
//! yields [`NO_VAULT_WARNING`] instead of the input, and restoring without a
//! session yields [`NO_SESSION_WARNING`] instead of echoing the reply.

use anyhow::Result;
use log::{debug, info, warn};

use crate::config::VaultConfig;
use crate::engine::RedactionEngine;
use crate::engines::vault_engine::VaultEngine;
use crate::errors::VaultmaskError;
use crate::redaction_match::RedactionSummaryItem;
use crate::session::RedactionSession;

/// Returned by redaction when no vault entries are configured.
pub const NO_VAULT_WARNING: &str = "[vaultmask] No PII vault entries are configured. \
Nothing was redacted and the input was withheld; add at least one entry and try again.";

/// Returned by restore when no redaction has happened yet.
pub const NO_SESSION_WARNING: &str = "[vaultmask] No active redaction session. \
The response was withheld because it cannot be restored; redact the outgoing text first.";

/// Maps an engine error to the public fail-closed output.
pub fn fail_closed_message(err: &VaultmaskError) -> String {
    match err {
        VaultmaskError::Unconfigured => NO_VAULT_WARNING.to_string(),
        VaultmaskError::NoActiveSession => NO_SESSION_WARNING.to_string(),
        other => format!("[vaultmask] Redaction failed and the text was withheld: {}", other),
    }
}

/// Owns an engine and the session of the most recent redaction.
///
/// The session is recreated whenever the input text changes, and reused when
/// the same text is redacted again. Restoring always uses the session of the
/// last successful redaction.
pub struct RedactionPipeline {
    engine: Box<dyn RedactionEngine>,
    session: Option<RedactionSession>,
    last_input: Option<String>,
    last_summary: Vec<RedactionSummaryItem>,
}

impl std::fmt::Debug for RedactionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedactionPipeline")
            .field("engine", &"<dyn RedactionEngine>")
            .field("session", &self.session)
            .finish()
    }
}

impl RedactionPipeline {
    pub fn new(vault: VaultConfig) -> Result<Self> {
        Ok(Self::with_engine(Box::new(VaultEngine::new(vault)?)))
    }

    pub fn with_engine(engine: Box<dyn RedactionEngine>) -> Self {
        Self { engine, session: None, last_input: None, last_summary: Vec::new() }
    }

    /// Swaps the vault. Any session from the previous vault is discarded.
    pub fn set_vault(&mut self, vault: VaultConfig) -> Result<()> {
        self.engine = Box::new(VaultEngine::new(vault)?);
        self.reset();
        Ok(())
    }

    /// Drops the active session; nonces issued so far become unrestorable.
    pub fn reset(&mut self) {
        if self.session.is_some() {
            debug!("Discarding active redaction session.");
        }
        self.session = None;
        self.last_input = None;
        self.last_summary.clear();
    }

    pub fn engine(&self) -> &dyn RedactionEngine {
        self.engine.as_ref()
    }

    pub fn active_session(&self) -> Option<&RedactionSession> {
        self.session.as_ref()
    }

    /// Per-category summary of the most recent successful redaction.
    pub fn last_summary(&self) -> &[RedactionSummaryItem] {
        &self.last_summary
    }

    /// Redacts `text`, or fails without producing a session.
    pub fn try_redact(&mut self, text: &str) -> Result<String, VaultmaskError> {
        let reuse = self.last_input.as_deref() == Some(text) && self.session.is_some();
        let mut session = match (reuse, self.session.take()) {
            (true, Some(existing)) => existing,
            _ => RedactionSession::new(),
        };

        match self.engine.redact(text, &mut session) {
            Ok((redacted, summary)) => {
                info!(
                    "Redacted {} occurrence(s) across {} categories.",
                    summary.iter().map(|s| s.occurrences).sum::<usize>(),
                    summary.len()
                );
                self.session = Some(session);
                self.last_input = Some(text.to_string());
                self.last_summary = summary;
                Ok(redacted)
            }
            Err(e) => {
                warn!("Redaction refused: {}", e);
                self.reset();
                Err(e)
            }
        }
    }

    /// Redacts `text`; on failure returns the fail-closed sentinel instead.
    pub fn redact(&mut self, text: &str) -> String {
        self.try_redact(text).unwrap_or_else(|e| fail_closed_message(&e))
    }

    /// Restores nonces in `text` using the active session.
    pub fn try_restore(&self, text: &str) -> Result<String, VaultmaskError> {
        let session = self.session.as_ref().ok_or(VaultmaskError::NoActiveSession)?;
        Ok(self.engine.restore(text, session))
    }

    /// Restores `text`; without a session returns the fail-closed sentinel.
    pub fn restore(&self, text: &str) -> String {
        self.try_restore(text).unwrap_or_else(|e| fail_closed_message(&e))
    }
}

/// One-shot redaction of a string against `vault`. The session is discarded,
/// so the output cannot be restored later.
pub fn headless_redact_string(vault: VaultConfig, content: &str) -> String {
    match RedactionPipeline::new(vault) {
        Ok(mut pipeline) => pipeline.redact(content),
        Err(e) => format!("[vaultmask] Invalid vault; the text was withheld: {}", e),
    }
}
