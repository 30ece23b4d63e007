// vaultmask-core/src/redaction_match.rs
//! Provides core data structures and utility functions for managing PII matches
//! and sensitive data logging within the `vaultmask-core` library.

use serde::{Serialize, Deserialize};
use log::debug;

use lazy_static::lazy_static;
use sha2::{Sha256, Digest};

use crate::config::PiiCategory;
use crate::errors::VaultmaskError;
use crate::preparer::CanonicalPiiEntry;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("VAULTMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One located, boundary-expanded occurrence of a prepared entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PiiMatch {
    pub pii: CanonicalPiiEntry,
    /// Byte offset into the original text (inclusive).
    pub original_start: usize,
    /// Byte offset into the original text (exclusive).
    pub original_end: usize,
    pub original_text: String,
    /// Canonical index range claimed by this match.
    pub canonical_start: usize,
    pub canonical_end: usize,
}

/// Represents a single item in the redaction summary, one per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionSummaryItem {
    pub category: PiiCategory,
    pub occurrences: usize,
    /// Never serialized: summaries may be written to disk or stdout as JSON.
    #[serde(skip)]
    pub original_texts: Vec<String>,
    pub nonces: Vec<String>,
    pub sample_hashes: Vec<String>,
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

/// The value itself when PII debug logging is allowed, a masked marker otherwise.
pub fn loggable(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_pii_match_debug(module_path: &str, m: &PiiMatch) {
    debug!("{} Found PiiMatch: Category='{}', Original='{}', Span={}..{}",
        module_path,
        m.pii.category(),
        loggable(&m.original_text),
        m.original_start,
        m.original_end
    );
}

pub fn log_substitution_debug(
    module_path: &str,
    category: PiiCategory,
    original_sensitive_content: &str,
    nonce: &str,
) {
    debug!(
        "{} Substitution: Original='{}', Nonce='{}' for category '{}'",
        module_path,
        loggable(original_sensitive_content),
        nonce,
        category
    );
}

/// Stable fingerprint of a matched snippet, safe to report instead of the PII.
pub fn canonical_sample_hash(category: PiiCategory, snippet: &str) -> String {
    let normalized = crate::canonical::canonical_form(snippet);

    let mut hasher = Sha256::new();
    hasher.update(category.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(normalized.as_bytes());
    hex::encode(hasher.finalize())
}

/// Groups matches by category. `nonce_for` supplies the replacement used for
/// each match, when one exists (scans have none).
pub fn summarize_matches<F>(matches: &[PiiMatch], mut nonce_for: F) -> Vec<RedactionSummaryItem>
where
    F: FnMut(&PiiMatch) -> Option<String>,
{
    let mut summary: Vec<RedactionSummaryItem> = Vec::new();
    for category in PiiCategory::ALL {
        let in_category: Vec<&PiiMatch> = matches.iter().filter(|m| m.pii.category() == category).collect();
        if in_category.is_empty() {
            continue;
        }
        summary.push(RedactionSummaryItem {
            category,
            occurrences: in_category.len(),
            original_texts: in_category.iter().map(|m| m.original_text.clone()).collect(),
            nonces: in_category.iter().filter_map(|m| nonce_for(*m)).collect(),
            sample_hashes: in_category
                .iter()
                .map(|m| canonical_sample_hash(category, &m.original_text))
                .collect(),
        });
    }
    summary
}

/// PII-free report of a scan, suitable for printing or writing to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_occurrences: usize,
    pub categories: Vec<RedactionSummaryItem>,
}

impl SummaryReport {
    pub fn new(categories: Vec<RedactionSummaryItem>) -> Self {
        let total_occurrences = categories.iter().map(|c| c.occurrences).sum();
        Self { total_occurrences, categories }
    }

    pub fn to_json(&self) -> Result<String, VaultmaskError> {
        serde_json::to_string_pretty(self).map_err(|e| VaultmaskError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_canonical_sample_hash_consistency() {
        let h1 = canonical_sample_hash(PiiCategory::Email, "Test@Example.COM ");
        let h2 = canonical_sample_hash(PiiCategory::Email, "test@example.com");
        assert_eq!(h1, h2);
        assert_ne!(h1, canonical_sample_hash(PiiCategory::Custom, "test@example.com"));
    }

    #[test]
    fn test_summary_report_json_omits_original_texts() {
        let report = SummaryReport::new(vec![RedactionSummaryItem {
            category: PiiCategory::Name,
            occurrences: 2,
            original_texts: vec!["Grace Hopper".into(), "Grace".into()],
            nonces: Vec::new(),
            sample_hashes: vec![canonical_sample_hash(PiiCategory::Name, "Grace")],
        }]);
        assert_eq!(report.total_occurrences, 2);
        let json = report.to_json().unwrap();
        assert!(json.contains("\"category\": \"name\""));
        assert!(!json.contains("Grace"));

        let parsed: SummaryReport = serde_json::from_str(&json).unwrap();
        assert!(parsed.categories[0].original_texts.is_empty());
    }
}
