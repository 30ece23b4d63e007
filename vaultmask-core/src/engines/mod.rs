// vaultmask-core/src/engines/mod.rs
//! Concrete implementations of the `RedactionEngine` trait.
//!
//! Each engine is a separate file within this directory. The vault engine
//! matches caller-supplied values in canonical space.
//!
//! # License
//! MIT OR APACHE 2.0

pub mod vault_engine;
