//! Configuration management for `vaultmask-core`.
//!
//! This module defines the raw PII entry types a caller hands to the engine
//! (the "vault"), and handles YAML serialization/deserialization of vault
//! files plus utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::VaultmaskError;
use crate::validators;

/// The kind of sensitive value an entry holds. Drives candidate expansion and
/// the shape of generated nonces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PiiCategory {
    Name,
    Email,
    Phone,
    Ssn,
    Address,
    Custom,
}

impl PiiCategory {
    pub const ALL: [PiiCategory; 6] = [
        PiiCategory::Name,
        PiiCategory::Email,
        PiiCategory::Phone,
        PiiCategory::Ssn,
        PiiCategory::Address,
        PiiCategory::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PiiCategory::Name => "name",
            PiiCategory::Email => "email",
            PiiCategory::Phone => "phone",
            PiiCategory::Ssn => "ssn",
            PiiCategory::Address => "address",
            PiiCategory::Custom => "custom",
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing an unknown category string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Unknown PII category '{}'; expected one of: name, email, phone, ssn, address, custom.",
            self.0
        )
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for PiiCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(PiiCategory::Name),
            "email" => Ok(PiiCategory::Email),
            "phone" => Ok(PiiCategory::Phone),
            "ssn" => Ok(PiiCategory::Ssn),
            "address" => Ok(PiiCategory::Address),
            "custom" => Ok(PiiCategory::Custom),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// A single known sensitive value supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PiiEntry {
    pub category: PiiCategory,
    pub value: String,
}

impl PiiEntry {
    pub fn new(category: PiiCategory, value: impl Into<String>) -> Self {
        Self { category, value: value.into() }
    }
}

impl FromStr for PiiEntry {
    type Err = VaultmaskError;

    /// Parses the `category:value` shorthand used on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, value) = s
            .split_once(':')
            .ok_or_else(|| VaultmaskError::InvalidEntry(format!("'{}' must look like 'category:value'", s)))?;
        let category: PiiCategory = category
            .parse()
            .map_err(|e: ParseCategoryError| VaultmaskError::InvalidEntry(e.to_string()))?;
        if value.trim().is_empty() {
            return Err(VaultmaskError::InvalidEntry(format!("'{}' has an empty value", s)));
        }
        Ok(PiiEntry::new(category, value.trim()))
    }
}

/// The top-level vault file structure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VaultConfig {
    #[serde(default)]
    pub entries: Vec<PiiEntry>,
}

impl VaultConfig {
    pub fn from_entries(entries: Vec<PiiEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads PII entries from a YAML vault file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading vault entries from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vault file {}", path.display()))?;
        let config: VaultConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse vault file {}", path.display()))?;

        validate_entries(&config.entries)?;
        info!("Loaded {} entries from vault {}.", config.entries.len(), path.display());

        Ok(config)
    }

    /// Number of entries per category, in `PiiCategory::ALL` order.
    pub fn category_counts(&self) -> Vec<(PiiCategory, usize)> {
        PiiCategory::ALL
            .iter()
            .map(|c| (*c, self.entries.iter().filter(|e| e.category == *c).count()))
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

/// Default places a vault file is looked up when none is given explicitly.
pub fn vault_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        dirs::home_dir().map(|p| p.join(".vaultmask").join("vault.yaml")),
        dirs::config_dir().map(|p| p.join("vaultmask").join("vault.yaml")),
        Some(PathBuf::from("./vault.yaml")),
    ];
    candidates.into_iter().flatten().collect()
}

/// Loads the first vault found among `vault_candidate_paths`, if any.
pub fn load_default_vault() -> Result<Option<VaultConfig>> {
    match vault_candidate_paths().into_iter().find(|p| p.is_file()) {
        Some(path) => VaultConfig::load_from_file(&path).map(Some),
        None => {
            debug!("No vault file found in default locations.");
            Ok(None)
        }
    }
}

/// Merges user-supplied entries into a base vault, keeping base order and
/// dropping exact (category, value) duplicates.
pub fn merge_vaults(base: VaultConfig, user: Option<VaultConfig>) -> VaultConfig {
    debug!("merge_vaults called. Base entries: {}", base.entries.len());
    let mut seen: HashSet<(PiiCategory, String)> = HashSet::new();
    let mut entries = Vec::with_capacity(base.entries.len());

    let user_entries = user.map(|u| u.entries).unwrap_or_default();
    for entry in base.entries.into_iter().chain(user_entries) {
        if seen.insert((entry.category, entry.value.clone())) {
            entries.push(entry);
        }
    }

    debug!("Final entries after merge: {}", entries.len());
    VaultConfig { entries }
}

/// Rejects entries that can never match and warns about values that look
/// malformed for their category.
pub fn validate_entries(entries: &[PiiEntry]) -> Result<()> {
    let mut errors = Vec::new();

    for (idx, entry) in entries.iter().enumerate() {
        if entry.value.trim().is_empty() {
            errors.push(format!("Entry #{} ({}) has an empty `value` field.", idx + 1, entry.category));
            continue;
        }
        if let Some(problem) = validators::category_mismatch(entry) {
            warn!("Vault entry #{} ({}): {}", idx + 1, entry.category, problem);
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Vault validation failed:\n{}", errors.join("\n"));
        Err(VaultmaskError::InvalidEntry(full_error_message).into())
    } else {
        Ok(())
    }
}
