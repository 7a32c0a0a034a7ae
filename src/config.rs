//! Configuration file parser for ~/.config/toolshelf/config.toml.
//!
//! The config file is optional — a missing file yields `Config::default()`.
//! Unknown keys are silently ignored by serde.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config file exceeds the maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Struct
// ============================================================================

/// Top-level application configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be
/// specified. Missing keys fall back to `Default::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme variant name ("dark" or "light").
    pub theme: String,

    /// Catalog source: an http(s) URL or a local file path. Overridden by
    /// the `--catalog` CLI flag; when absent, the default catalog path in
    /// the config directory is used.
    pub catalog: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            catalog: None,
        }
    }
}

impl Config {
    /// Maximum config file size (1 MB). A config this large is corrupted.
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → silently accepted (serde default behavior)
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = write_config("");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn parses_known_keys() {
        let file = write_config(
            r#"
theme = "light"
catalog = "https://example.com/catalog.json"
"#,
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(
            config.catalog.as_deref(),
            Some("https://example.com/catalog.json")
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let file = write_config("theme = \"light\"\nunknown_key = 42\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let file = write_config("theme = [broken");
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
