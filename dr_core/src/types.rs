use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One raw capture file on disk, plus the attributes derived from its
/// basename. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureFile {
    pub path: PathBuf,
    /// First `_`-delimited token of the basename (`YYYY-MM-DD`).
    pub date: String,
    /// Basename with the capture suffix stripped, tagged `-Session`.
    pub session_name: String,
}

impl CaptureFile {
    pub fn new(path: impl Into<PathBuf>, date: String, session_name: String) -> Self {
        Self {
            path: path.into(),
            date,
            session_name,
        }
    }

    pub fn basename(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One payload string extracted from a matched `wrb.fr` triple inside a
/// decoded JSON chunk. Order of appearance in the stream is significant:
/// downstream selection is first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Zero-based position within the capture body stream.
    pub index: usize,
    /// The opaque payload (itself a JSON document, decoded later).
    pub payload: String,
}

impl Frame {
    pub fn new(index: usize, payload: impl Into<String>) -> Self {
        Self {
            index,
            payload: payload.into(),
        }
    }
}

/// A generated Deep Research note, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchNote {
    /// Allocated document name, unique within one run.
    pub name: String,
    pub title: String,
    pub date: String,
    /// Report body with the leading heading stripped.
    pub body: String,
    /// Back-reference to the owning session note.
    pub source_session: String,
}

/// The per-capture-file session note linking to every research note the
/// same file produced. Emitted only when the link list is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionNote {
    pub name: String,
    pub date: String,
    /// Research note names, in production order.
    pub links: Vec<String>,
}

/// Counters reported at the end of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Capture files handed to the pipeline.
    pub files_seen: usize,
    /// Files that yielded at least one frame.
    pub files_with_frames: usize,
    /// Frames whose payload failed to decode or held no report.
    pub frames_skipped: usize,
    pub research_notes: usize,
    pub session_notes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_file_basename() {
        let file = CaptureFile::new(
            "/tmp/captures/2025-11-30_12-00-00_000_batchexecute.txt",
            "2025-11-30".to_string(),
            "2025-11-30_12-00-00_000-Session".to_string(),
        );
        assert_eq!(file.basename(), "2025-11-30_12-00-00_000_batchexecute.txt");
    }

    #[test]
    fn test_frame_preserves_payload() {
        let frame = Frame::new(0, "[1,2,3]");
        assert_eq!(frame.index, 0);
        assert_eq!(frame.payload, "[1,2,3]");
    }

    #[test]
    fn test_run_summary_defaults_to_zero() {
        let summary = RunSummary::default();
        assert_eq!(summary.files_seen, 0);
        assert_eq!(summary.research_notes, 0);
        assert_eq!(summary.session_notes, 0);
    }
}
