//! # Deep Research Vault Core
//!
//! Shared types for the Deep Research vault builder.
//!
//! This crate provides:
//! - Domain types for capture files, extracted frames, and notes
//! - The run summary reported by the pipeline
//!
//! It carries no logic beyond simple constructors; parsing lives in
//! `extract`, note generation in `notes`.

pub mod types;

// Re-export commonly used types for convenience
pub use types::{CaptureFile, Frame, ResearchNote, RunSummary, SessionNote};
