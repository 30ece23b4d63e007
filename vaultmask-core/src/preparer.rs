//! preparer.rs - Expands raw vault entries into canonical match candidates.
//!
//! Redacting only the literal vault value under-protects composite
//! identifiers: a full name leaks through a lone surname, an email address
//! through its local part or its company domain. Each entry is therefore
//! expanded into the literal value plus its meaningful fragments, every
//! candidate is canonicalized, and the result is de-duplicated and ordered
//! longest-first so the matcher always claims the most specific candidate.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::collections::HashSet;

use crate::canonical::canonical_form;
use crate::config::{PiiCategory, PiiEntry};
use crate::redaction_match::loggable;

/// Email providers too generic to be worth redacting as a domain.
pub const COMMON_EMAIL_PROVIDERS: [&str; 10] = [
    "gmail", "hotmail", "yahoo", "outlook", "icloud", "aol", "protonmail", "mail", "live", "msn",
];

/// Derived fragments shorter than this (in canonical chars) are not used.
const MIN_FRAGMENT_LEN: usize = 2;

/// A vault entry (or a fragment derived from one) with its canonical form.
///
/// Immutable once created; only the preparer builds these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPiiEntry {
    entry: PiiEntry,
    canonical: String,
    canonical_chars: Vec<char>,
}

impl CanonicalPiiEntry {
    fn new(entry: PiiEntry, canonical: String) -> Self {
        let canonical_chars = canonical.chars().collect();
        Self { entry, canonical, canonical_chars }
    }

    pub fn category(&self) -> PiiCategory {
        self.entry.category
    }

    /// The display value nonces are restored to.
    pub fn value(&self) -> &str {
        &self.entry.value
    }

    pub fn entry(&self) -> &PiiEntry {
        &self.entry
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn canonical_chars(&self) -> &[char] {
        &self.canonical_chars
    }

    /// Length in canonical characters.
    pub fn canonical_len(&self) -> usize {
        self.canonical_chars.len()
    }
}

/// Expands, canonicalizes, de-duplicates and sorts vault entries.
///
/// Candidates are produced in input order (each literal value followed by its
/// fragments). The first candidate seen for a canonical value wins, and the
/// stable length-descending sort keeps that input order for equal lengths.
pub fn prepare_pii_entries(entries: &[PiiEntry]) -> Vec<CanonicalPiiEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut prepared = Vec::new();

    for entry in entries {
        for candidate in expand_entry(entry) {
            let canonical = canonical_form(&candidate.value);
            if canonical.is_empty() {
                debug!(
                    "Skipping {} candidate '{}' with empty canonical form.",
                    candidate.category,
                    loggable(&candidate.value)
                );
                continue;
            }
            if !seen.insert(canonical.clone()) {
                continue;
            }
            prepared.push(CanonicalPiiEntry::new(candidate, canonical));
        }
    }

    prepared.sort_by(|a, b| b.canonical_len().cmp(&a.canonical_len()));
    debug!("Prepared {} candidates from {} vault entries.", prepared.len(), entries.len());
    prepared
}

/// The literal entry followed by the fragments derived from it.
fn expand_entry(entry: &PiiEntry) -> Vec<PiiEntry> {
    let mut candidates = vec![entry.clone()];

    match entry.category {
        PiiCategory::Name => {
            candidates.extend(
                entry
                    .value
                    .split_whitespace()
                    .filter(|part| is_fragment_worth_keeping(part))
                    .map(|part| PiiEntry::new(PiiCategory::Name, part)),
            );
        }
        PiiCategory::Email => {
            if let Some((local, domain)) = entry.value.trim().split_once('@') {
                if is_fragment_worth_keeping(local) {
                    candidates.push(PiiEntry::new(PiiCategory::Name, local));
                }
                if is_fragment_worth_keeping(domain) && !is_common_provider(domain) {
                    candidates.push(PiiEntry::new(PiiCategory::Custom, domain));
                }
            }
        }
        PiiCategory::Phone | PiiCategory::Ssn | PiiCategory::Address | PiiCategory::Custom => {}
    }

    candidates
}

fn is_fragment_worth_keeping(fragment: &str) -> bool {
    canonical_form(fragment).chars().count() >= MIN_FRAGMENT_LEN
}

/// True when the domain's leading label is a public mail provider.
pub fn is_common_provider(domain: &str) -> bool {
    let leading = domain.trim().split('.').next().unwrap_or_default().to_lowercase();
    COMMON_EMAIL_PROVIDERS.contains(&leading.as_str())
}
