use std::path::{Path, PathBuf};

use config::VaultConfig;
use dr_core::types::RunSummary;
use errors::VaultError;
use extract::{CaptureReader, locate_reports, parse_frames};
use notes::NoteGenerator;
use tracing::{debug, warn};

use crate::writer::VaultWriter;

/// Orchestrates one run: capture reading, frame extraction, report
/// location, note generation, and vault writing.
pub struct Pipeline {
    reader: CaptureReader,
    writer: VaultWriter,
}

impl Pipeline {
    #[must_use]
    pub fn new(config: &VaultConfig) -> Self {
        Self {
            reader: CaptureReader::new(config.capture_suffix.clone()),
            writer: VaultWriter::new(config.research_dir.clone(), config.chat_dir.clone()),
        }
    }

    /// Process a set of capture files.
    ///
    /// Files are ordered lexicographically by basename; the order fixes
    /// which colliding note gets the unsuffixed name. The name registry
    /// is created fresh here, so names are unique within this run only.
    /// Recoverable conditions are logged and skipped; write failures
    /// propagate and abort the run.
    pub fn run(&self, files: &[PathBuf]) -> Result<RunSummary, VaultError> {
        let mut generator = NoteGenerator::new();
        let mut summary = RunSummary::default();

        let mut ordered: Vec<&PathBuf> = files.iter().collect();
        ordered.sort_by_key(|path| path.file_name().map(std::ffi::OsStr::to_os_string));

        for path in ordered {
            summary.files_seen += 1;
            self.process_file(path, &mut generator, &mut summary)?;
        }

        Ok(summary)
    }

    fn process_file(
        &self,
        path: &Path,
        generator: &mut NoteGenerator,
        summary: &mut RunSummary,
    ) -> Result<(), VaultError> {
        let capture = self.reader.describe(path);

        let body = match self.reader.read_body(path) {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "skipping capture file");
                return Ok(());
            }
        };

        let frames = parse_frames(&body);
        if frames.is_empty() {
            debug!(file = capture.basename(), "no frames, skipping file");
            return Ok(());
        }
        summary.files_with_frames += 1;

        let mut links = Vec::new();
        for frame in &frames {
            let reports = match locate_reports(frame) {
                Ok(reports) => reports,
                Err(e) => {
                    warn!(file = capture.basename(), error = %e, "skipping frame");
                    summary.frames_skipped += 1;
                    continue;
                }
            };

            // First match in pre-order wins; further candidates inside
            // the same frame are ignored.
            let Some(report) = reports.first() else {
                debug!(
                    file = capture.basename(),
                    frame = frame.index,
                    "no report candidate"
                );
                summary.frames_skipped += 1;
                continue;
            };

            let note = generator.research_note(&capture.date, report, &capture.session_name);
            self.writer.write_research_note(&note)?;
            summary.research_notes += 1;
            links.push(note.name);
        }

        if let Some(session) = generator.session_note(&capture.date, &capture.session_name, links)
        {
            self.writer.write_session_note(&session)?;
            summary.session_notes += 1;
        }

        Ok(())
    }
}
