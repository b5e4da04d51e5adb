//! # Extraction Engine
//!
//! Turns raw batch-execute capture files into report candidates.
//!
//! Three stages, strictly layered:
//! - [`capture`]: load one capture file, locate the response body
//! - [`batch`]: walk the length-prefixed multi-JSON stream, extract
//!   frame payloads
//! - [`report`]: decode a payload and recursively locate report-shaped
//!   nodes
//!
//! Every recoverable condition stays per-item; nothing in this crate
//! aborts a whole run.

pub mod batch;
pub mod capture;
pub mod report;

pub use batch::{FRAME_TAG, parse_frames};
pub use capture::{BODY_MARKER, CaptureReader, XSSI_PREFIX};
pub use report::{MAX_DEPTH, find_reports, locate_reports};
