// vaultmask-core/src/session.rs
//! Per-round-trip substitution state.
//!
//! A `RedactionSession` is created for one redaction pass and handed back to
//! `restore` once the external reply arrives. It is an ordinary owned value:
//! the caller decides its lifetime, and nonces issued by one session mean
//! nothing to another.
//!
//! License: MIT OR APACHE 2.0

use std::collections::{HashMap, HashSet};

use crate::canonical::{canonical_form, is_separator};
use crate::config::PiiCategory;

/// Bidirectional canonical-PII <-> nonce mapping plus nonce bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionSession {
    pii_to_nonce: HashMap<String, String>,
    nonce_to_pii: HashMap<String, String>,
    used_nonces: HashSet<String>,
    nonce_counters: HashMap<PiiCategory, u32>,
    /// Canonical forms of the vault's own values; never issued as nonces.
    reserved_pii: HashSet<String>,
}

impl RedactionSession {
    /// An empty session: no mappings, no used nonces, every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nonce already issued for a canonical PII value.
    pub fn nonce_for(&self, canonical: &str) -> Option<&str> {
        self.pii_to_nonce.get(canonical).map(String::as_str)
    }

    /// Original value a nonce stands for.
    pub fn original_for(&self, nonce: &str) -> Option<&str> {
        self.nonce_to_pii.get(nonce).map(String::as_str)
    }

    /// `(nonce, original)` pairs, in no particular order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nonce_to_pii.iter().map(|(n, o)| (n.as_str(), o.as_str()))
    }

    /// Number of distinct PII values substituted so far.
    pub fn len(&self) -> usize {
        self.pii_to_nonce.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pii_to_nonce.is_empty()
    }

    pub fn is_nonce_used(&self, candidate: &str) -> bool {
        self.used_nonces.contains(candidate)
    }

    /// How many nonces of `category` have been generated.
    pub fn counter(&self, category: PiiCategory) -> u32 {
        self.nonce_counters.get(&category).copied().unwrap_or(0)
    }

    /// Keeps `value` from ever being issued as a nonce, e.g. a string the
    /// caller knows already appears in the text.
    pub fn reserve(&mut self, value: impl Into<String>) {
        self.used_nonces.insert(value.into());
    }

    /// Keeps the canonical vault value `canonical` out of every nonce.
    pub fn reserve_pii(&mut self, canonical: &str) {
        if !self.reserved_pii.contains(canonical) {
            self.reserved_pii.insert(canonical.to_string());
        }
    }

    /// True when any run of consecutive words in `candidate` canonicalizes to
    /// a reserved vault value. Covers the whole candidate as well.
    pub fn resembles_reserved_pii(&self, candidate: &str) -> bool {
        if self.reserved_pii.is_empty() {
            return false;
        }
        let words: Vec<String> = candidate
            .split(is_separator)
            .map(canonical_form)
            .filter(|w| !w.is_empty())
            .collect();
        (0..words.len()).any(|start| {
            let mut joined = String::new();
            words[start..].iter().any(|word| {
                joined.push_str(word);
                self.reserved_pii.contains(&joined)
            })
        })
    }

    /// Returns the current counter for `category` and advances it.
    pub(crate) fn next_counter(&mut self, category: PiiCategory) -> u32 {
        let counter = self.nonce_counters.entry(category).or_insert(0);
        let current = *counter;
        *counter = counter.saturating_add(1);
        current
    }

    /// Marks a nonce as issued. Returns false if it was already taken.
    pub(crate) fn mark_used(&mut self, nonce: &str) -> bool {
        self.used_nonces.insert(nonce.to_string())
    }

    /// Records both directions of a substitution.
    pub(crate) fn record(&mut self, canonical: &str, nonce: &str, original: &str) {
        self.pii_to_nonce.insert(canonical.to_string(), nonce.to_string());
        self.nonce_to_pii.insert(nonce.to_string(), original.to_string());
    }
}
