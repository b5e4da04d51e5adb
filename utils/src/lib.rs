//! # Vault Builder Utilities
//!
//! Common helpers for deriving note and session identities from capture
//! file basenames.

use chrono::NaiveDate;

/// Characters that are unsafe in vault document names on common
/// filesystems. Each is replaced with `_`.
const UNSAFE_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Make a title safe to use as a document file name.
///
/// # Examples
///
/// ```
/// use utils::sanitize_title;
///
/// assert_eq!(sanitize_title("A/B: C?"), "A_B_ C_");
/// assert_eq!(sanitize_title("  plain  "), "plain");
/// ```
#[must_use]
pub fn sanitize_title(text: &str) -> String {
    text.replace(UNSAFE_CHARS, "_").trim().to_string()
}

/// Extract the leading date token of a capture basename.
///
/// Capture files are named `<timestamp>_<kind>.txt` where the timestamp
/// starts with `YYYY-MM-DD_`; the first `_`-delimited token is the date.
#[must_use]
pub fn date_from_basename(basename: &str) -> String {
    basename.split('_').next().unwrap_or_default().to_string()
}

/// Whether a basename-derived token is a well-formed `YYYY-MM-DD` date.
#[must_use]
pub fn is_date_token(token: &str) -> bool {
    NaiveDate::parse_from_str(token, "%Y-%m-%d").is_ok()
}

/// Derive the session note name for a capture basename: strip the
/// capture suffix and tag the remainder with `-Session`.
#[must_use]
pub fn session_name_from_basename(basename: &str, capture_suffix: &str) -> String {
    let stem = basename.strip_suffix(capture_suffix).unwrap_or(basename);
    format!("{stem}-Session")
}
