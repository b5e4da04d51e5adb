use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Find capture files directly under `input_dir`, sorted
/// lexicographically by basename.
///
/// The sort order fixes the processing order and therefore the
/// collision-suffix order of allocated note names, so it must stay
/// stable. A missing or unreadable directory yields an empty list.
#[must_use]
pub fn discover_captures(input_dir: &Path, capture_suffix: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(input_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(capture_suffix))
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort_by_key(|path| path.file_name().map(std::ffi::OsStr::to_os_string));
    files
}
