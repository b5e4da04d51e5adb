use std::path::PathBuf;

use errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Suffix selecting batch-RPC capture files from the input directory.
pub const DEFAULT_CAPTURE_SUFFIX: &str = "_batchexecute.txt";

/// Directories and file-selection settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VaultConfig {
    /// Directory scanned for capture files.
    pub input_dir: PathBuf,
    /// Target directory for Deep Research notes.
    pub research_dir: PathBuf,
    /// Target directory for per-session chat notes.
    pub chat_dir: PathBuf,
    /// Only files whose basename ends with this suffix are processed.
    pub capture_suffix: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("captured_data"),
            research_dir: PathBuf::from("dr_output"),
            chat_dir: PathBuf::from("chat_output"),
            capture_suffix: DEFAULT_CAPTURE_SUFFIX.to_string(),
        }
    }
}

impl VaultConfig {
    /// Apply CLI-level overrides on top of this configuration.
    #[must_use]
    pub fn with_overrides(
        mut self,
        input_dir: Option<PathBuf>,
        research_dir: Option<PathBuf>,
        chat_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = input_dir {
            self.input_dir = dir;
        }
        if let Some(dir) = research_dir {
            self.research_dir = dir;
        }
        if let Some(dir) = chat_dir {
            self.chat_dir = dir;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capture_suffix.is_empty() {
            return Err(ConfigError::Invalid {
                field: "capture_suffix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.input_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "input_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
