// vaultmask/src/utils/vault_source.rs
//! Resolves the vault a command runs against: an explicit `--vault` file (or
//! `VAULTMASK_VAULT`), otherwise the first default location that exists, plus
//! any inline `--entry` values appended after it.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use vaultmask_core::{load_default_vault, merge_vaults, PiiEntry, VaultConfig};

pub fn resolve_vault(vault_path: Option<&Path>, inline: &[PiiEntry]) -> Result<VaultConfig> {
    let base = match vault_path {
        Some(path) => VaultConfig::load_from_file(path)
            .with_context(|| format!("Failed to load vault '{}'", path.display()))?,
        None => load_default_vault()?.unwrap_or_default(),
    };
    debug!("Base vault has {} entries; {} given inline.", base.entries.len(), inline.len());

    let user = (!inline.is_empty()).then(|| VaultConfig::from_entries(inline.to_vec()));
    Ok(merge_vaults(base, user))
}
