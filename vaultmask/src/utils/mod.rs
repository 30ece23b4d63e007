// vaultmask/src/utils/mod.rs
pub mod input;
pub mod vault_source;
