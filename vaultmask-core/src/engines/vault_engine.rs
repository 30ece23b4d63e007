// vaultmask-core/src/engines/vault_engine.rs
//! A `RedactionEngine` implementation backed by a vault of known PII values.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;

use crate::config::{validate_entries, VaultConfig};
use crate::engine::RedactionEngine;
use crate::errors::VaultmaskError;
use crate::matcher::find_pii_matches;
use crate::preparer::{prepare_pii_entries, CanonicalPiiEntry};
use crate::redaction_match::{summarize_matches, PiiMatch, RedactionSummaryItem};
use crate::redactor::{apply_matches, reserve_vault_values, restore};
use crate::session::RedactionSession;

#[derive(Debug, Clone)]
pub struct VaultEngine {
    prepared: Vec<CanonicalPiiEntry>,
    vault: VaultConfig,
}

impl VaultEngine {
    /// Validates and prepares the vault's entries.
    pub fn new(vault: VaultConfig) -> Result<Self> {
        validate_entries(&vault.entries).context("Failed to prepare vault entries for VaultEngine")?;
        let prepared = prepare_pii_entries(&vault.entries);
        debug!("VaultEngine ready with {} candidates.", prepared.len());
        Ok(Self { prepared, vault })
    }
}

impl RedactionEngine for VaultEngine {
    fn redact(
        &self,
        content: &str,
        session: &mut RedactionSession,
    ) -> Result<(String, Vec<RedactionSummaryItem>), VaultmaskError> {
        if self.prepared.is_empty() {
            return Err(VaultmaskError::Unconfigured);
        }
        reserve_vault_values(&self.prepared, session);
        let matches = find_pii_matches(content, &self.prepared);
        let redacted = apply_matches(content, &matches, session);
        let summary = summarize_matches(&matches, |m| session.nonce_for(m.pii.canonical()).map(str::to_string));
        Ok((redacted, summary))
    }

    fn restore(&self, content: &str, session: &RedactionSession) -> String {
        restore(content, session)
    }

    fn analyze_for_stats(&self, content: &str) -> Vec<RedactionSummaryItem> {
        summarize_matches(&self.find_matches(content), |_| None)
    }

    fn find_matches(&self, content: &str) -> Vec<PiiMatch> {
        find_pii_matches(content, &self.prepared)
    }

    fn prepared_entries(&self) -> &[CanonicalPiiEntry] {
        &self.prepared
    }

    fn get_vault(&self) -> &VaultConfig {
        &self.vault
    }
}
