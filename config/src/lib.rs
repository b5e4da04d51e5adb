//! # Configuration
//!
//! Configuration for the Deep Research vault builder.
//!
//! This crate provides:
//! - The `VaultConfig` structure (input and output directories, capture
//!   file suffix)
//! - TOML file loading
//! - Precedence: CLI flags > config file > defaults

pub mod file_loader;
pub mod vault;

pub use file_loader::load_from_file;
pub use vault::VaultConfig;
