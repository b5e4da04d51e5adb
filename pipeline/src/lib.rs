//! # Pipeline
//!
//! Sequences the extraction engine and the note-generation layer over a
//! set of capture files:
//! - [`discover`]: find capture files under the input directory
//! - [`runner`]: per-file frame extraction, report location, and note
//!   assembly
//! - [`writer`]: persist rendered notes into the vault directories
//!
//! Per-item failures are logged and skipped; only vault write failures
//! abort a run.

pub mod discover;
pub mod runner;
pub mod writer;

pub use discover::discover_captures;
pub use runner::Pipeline;
pub use writer::VaultWriter;
