//! User settings for finboard
//!
//! Where the datasets come from and how amounts are shown. Every field has a
//! default, so a missing or partial `config.json` is fine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::paths::FinboardPaths;
use crate::error::{FinboardError, FinboardResult};
use crate::storage::{write_json_atomic, FileTransport, HttpTransport, Loader};

/// Where the deployment root lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DataSource {
    /// A directory containing `data/*.json`
    Directory { root: PathBuf },
    /// A base URL serving `data/*.json`
    Url { base: String },
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Directory {
            root: PathBuf::from("public"),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Directory { root } => write!(f, "directory {}", root.display()),
            DataSource::Url { base } => write!(f, "url {}", base),
        }
    }
}

impl DataSource {
    /// Build a loader reading from this source
    pub fn loader(&self, timeout: Duration) -> FinboardResult<Loader> {
        match self {
            DataSource::Directory { root } => Ok(Loader::new(FileTransport::new(root.clone()))),
            DataSource::Url { base } => Ok(Loader::new(HttpTransport::new(base.clone(), timeout)?)),
        }
    }
}

/// User settings for finboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Deployment root to load datasets from
    #[serde(default)]
    pub source: DataSource,

    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Per-request timeout for the HTTP transport
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            source: DataSource::default(),
            currency_symbol: default_currency(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Settings {
    /// Request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Build a loader for the configured source
    pub fn loader(&self) -> FinboardResult<Loader> {
        self.source.loader(self.request_timeout())
    }

    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// Nothing is written; `finboard config --save` persists settings.
    pub fn load(paths: &FinboardPaths) -> Result<Self, FinboardError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinboardError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| FinboardError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinboardPaths) -> Result<(), FinboardError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.request_timeout(), Duration::from_secs(10));
        assert_eq!(
            settings.source,
            DataSource::Directory {
                root: PathBuf::from("public")
            }
        );
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            source: DataSource::Url {
                base: "https://example.org/dash".into(),
            },
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load(&paths).unwrap();
        assert_eq!(loaded.source, settings.source);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"source": {"type": "directory", "root": "/srv/dash"}}"#,
        )
        .unwrap();

        let loaded = Settings::load(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.source.to_string(), "directory /srv/dash");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let result = Settings::load(&paths);
        assert!(matches!(result, Err(FinboardError::Config(_))));
    }

    #[test]
    fn test_url_source_rejects_bad_scheme() {
        let source = DataSource::Url {
            base: "file:///tmp".into(),
        };
        assert!(source.loader(Duration::from_secs(1)).is_err());
    }
}
