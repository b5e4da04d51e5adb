//! # Note Generation
//!
//! Turns located report bodies into cross-linked vault documents:
//! - [`title`]: derive a human title, strip the duplicate leading
//!   heading
//! - [`allocator`]: run-scoped, collision-suffixed document names
//! - [`generator`]: assemble research and session notes
//! - [`render`]: the fixed markdown schemas
//!
//! Rendering is append-only: nothing here reads existing vault files.

pub mod allocator;
pub mod generator;
pub mod render;
pub mod title;

pub use allocator::{NameRegistry, base_name};
pub use generator::NoteGenerator;
pub use render::{render_research_note, render_session_note};
pub use title::{FALLBACK_TITLE, resolve_title, strip_leading_heading};
