use dr_core::types::{ResearchNote, SessionNote};

use crate::allocator::{NameRegistry, base_name};
use crate::title::{resolve_title, strip_leading_heading};

/// Assembles notes for one pipeline run.
///
/// Holds the run-scoped [`NameRegistry`]; a new generator means a new
/// namespace, so names are only unique within one run.
#[derive(Debug, Default)]
pub struct NoteGenerator {
    registry: NameRegistry,
}

impl NoteGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a research note from a located report body.
    ///
    /// Resolves the title, allocates a unique document name for the
    /// `(date, title)` pair, and strips the duplicate leading heading
    /// from the body.
    pub fn research_note(&mut self, date: &str, report: &str, session_name: &str) -> ResearchNote {
        let title = resolve_title(report);
        let name = self.registry.allocate(&base_name(date, &title));
        ResearchNote {
            name,
            title,
            date: date.to_string(),
            body: strip_leading_heading(report),
            source_session: session_name.to_string(),
        }
    }

    /// Build the per-capture-file session note. Returns `None` when no
    /// research notes were produced; a session note is never emitted
    /// with an empty link list.
    pub fn session_note(
        &self,
        date: &str,
        session_name: &str,
        links: Vec<String>,
    ) -> Option<SessionNote> {
        if links.is_empty() {
            return None;
        }
        Some(SessionNote {
            name: session_name.to_string(),
            date: date.to_string(),
            links,
        })
    }
}
