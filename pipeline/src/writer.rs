use std::fs;
use std::path::{Path, PathBuf};

use dr_core::types::{ResearchNote, SessionNote};
use errors::VaultError;
use notes::{render_research_note, render_session_note};
use tracing::info;

/// Persists rendered notes into the vault output directories.
///
/// Append-only: the writer never reads existing documents to merge
/// content. Write failures are fatal to the run.
#[derive(Debug, Clone)]
pub struct VaultWriter {
    research_dir: PathBuf,
    chat_dir: PathBuf,
}

impl VaultWriter {
    pub fn new(research_dir: impl Into<PathBuf>, chat_dir: impl Into<PathBuf>) -> Self {
        Self {
            research_dir: research_dir.into(),
            chat_dir: chat_dir.into(),
        }
    }

    pub fn write_research_note(&self, note: &ResearchNote) -> Result<PathBuf, VaultError> {
        let path = self.write(&self.research_dir, &note.name, &render_research_note(note))?;
        info!(path = %path.display(), "research note written");
        Ok(path)
    }

    pub fn write_session_note(&self, note: &SessionNote) -> Result<PathBuf, VaultError> {
        let path = self.write(&self.chat_dir, &note.name, &render_session_note(note))?;
        info!(path = %path.display(), "session note written");
        Ok(path)
    }

    fn write(&self, dir: &Path, name: &str, content: &str) -> Result<PathBuf, VaultError> {
        fs::create_dir_all(dir).map_err(|e| VaultError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = dir.join(format!("{name}.md"));
        fs::write(&path, content).map_err(|e| VaultError::Write {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }
}
