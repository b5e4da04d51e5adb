use std::fs;
use std::path::Path;

use dr_core::types::CaptureFile;
use errors::ExtractError;
use tracing::warn;

/// Line-exact marker separating the header metadata from the raw
/// response body in a capture file.
pub const BODY_MARKER: &str = "### RESPONSE BODY (raw)";

/// Anti-hijacking prefix emitted by the vendor before the first chunk.
pub const XSSI_PREFIX: &str = ")]}'";

/// Loads capture files and derives their identity attributes.
#[derive(Debug, Clone)]
pub struct CaptureReader {
    capture_suffix: String,
}

impl CaptureReader {
    pub fn new(capture_suffix: impl Into<String>) -> Self {
        Self {
            capture_suffix: capture_suffix.into(),
        }
    }

    /// Derive the `date` and `session_name` attributes from a path's
    /// basename without touching the filesystem.
    ///
    /// A basename whose leading token is not a well-formed `YYYY-MM-DD`
    /// date is diagnosed but still processed; the token is carried into
    /// the note identities as-is.
    pub fn describe(&self, path: &Path) -> CaptureFile {
        let basename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let date = utils::date_from_basename(basename);
        if !utils::is_date_token(&date) {
            warn!(file = basename, token = %date, "basename does not start with a date token");
        }
        CaptureFile::new(
            path,
            date,
            utils::session_name_from_basename(basename, &self.capture_suffix),
        )
    }

    /// Read the response body of a capture file as lines.
    ///
    /// Decoding is best-effort: undecodable bytes are substituted, never
    /// an error. The returned lines start after the body marker with the
    /// anti-hijacking prefix and any immediately following blank lines
    /// skipped. A missing marker is reported as
    /// [`ExtractError::MissingBodyMarker`].
    pub fn read_body(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let bytes = fs::read(path).map_err(|e| ExtractError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let lines: Vec<&str> = text.lines().collect();
        let marker = lines.iter().position(|line| *line == BODY_MARKER).ok_or(
            ExtractError::MissingBodyMarker {
                path: path.to_path_buf(),
            },
        )?;

        let mut start = marker + 1;
        while start < lines.len() {
            let line = lines[start];
            if line.trim().is_empty() || line.starts_with(XSSI_PREFIX) {
                start += 1;
            } else {
                break;
            }
        }

        Ok(lines[start..].iter().map(|line| (*line).to_string()).collect())
    }
}
