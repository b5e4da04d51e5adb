//! # Vault Builder Errors
//!
//! Error handling for the Deep Research vault builder.
//!
//! - Uses `thiserror` for structured error definitions
//! - Named fields throughout for stable, greppable messages
//! - Recoverable extraction conditions stay per-item; only vault write
//!   failures abort a run

use std::path::PathBuf;

use thiserror::Error;

/// Extraction-stage errors. All of these are recoverable at the
/// pipeline level: the offending file or frame is skipped and the run
/// continues.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Capture file unreadable: {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("Capture file has no response body marker: {path}")]
    MissingBodyMarker { path: PathBuf },

    #[error("Frame #{frame} payload is not valid JSON: {reason}")]
    PayloadDecode { frame: usize, reason: String },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file unreadable: {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("Config file invalid: {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid configuration: {field}: {reason}")]
    Invalid { field: String, reason: String },
}

/// Vault writing errors. A partially written knowledge base is unsafe
/// to leave ambiguous, so these are fatal and abort the run.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write note {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_messages_name_the_item() {
        let err = ExtractError::PayloadDecode {
            frame: 3,
            reason: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("#3"));

        let err = ExtractError::MissingBodyMarker {
            path: PathBuf::from("/tmp/x.txt"),
        };
        assert!(err.to_string().contains("/tmp/x.txt"));
    }

    #[test]
    fn test_vault_error_carries_io_source() {
        use std::error::Error as _;

        let err = VaultError::Write {
            path: PathBuf::from("/vault/note.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("note.md"));
    }
}
