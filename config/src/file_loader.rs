use std::fs;
use std::path::Path;

use errors::ConfigError;

use crate::vault::VaultConfig;

/// Load a `VaultConfig` from a TOML file. Missing keys fall back to
/// their defaults; unknown keys are rejected.
pub fn load_from_file(path: &Path) -> Result<VaultConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let config: VaultConfig = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "input_dir = \"my_captures\"").unwrap();

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("my_captures"));
        assert_eq!(config.research_dir, PathBuf::from("dr_output"));
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "output_dir = \"typo\"").unwrap();

        assert!(matches!(
            load_from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_unreadable() {
        assert!(matches!(
            load_from_file(Path::new("/nonexistent/drvault.toml")),
            Err(ConfigError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "capture_suffix = \"\"").unwrap();

        assert!(matches!(
            load_from_file(file.path()),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
