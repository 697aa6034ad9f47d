//! Console configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, a JSON
//! config file (explicit path, or `$XDG_CONFIG_HOME/wise/config.json` when
//! present), and finally whatever the caller overrides (CLI flags).

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::{ConsoleError, Result, ResultExt},
    params::DEFAULT_PAGE_SIZE,
};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8888/wise/api";
/// Per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Task list refresh period.
pub const DEFAULT_LIST_INTERVAL_MS: u64 = 5_000;
/// Task detail refresh period.
pub const DEFAULT_DETAIL_INTERVAL_MS: u64 = 2_000;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of the REST API, including any path prefix
    pub base_url: String,
    pub timeout_ms: u64,
    pub list_interval_ms: u64,
    pub detail_interval_ms: u64,
    pub page_size: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            list_interval_ms: DEFAULT_LIST_INTERVAL_MS,
            detail_interval_ms: DEFAULT_DETAIL_INTERVAL_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the XDG config file is
    /// used if present and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::FileSystem` if the file cannot be read and
    /// `ConsoleError::Configuration` if it is malformed or invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path(),
        };
        match path {
            Some(path) => Self::from_file(&path),
            None => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());
        let raw = std::fs::read_to_string(path).map_err(|e| ConsoleError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(format!("invalid config file '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Existing config file under the XDG config directory, if any.
    pub fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("wise").find_config_file(CONFIG_FILE_NAME)
    }

    /// Check that the base URL parses and all periods are non-zero.
    pub fn validate(&self) -> Result<()> {
        self.parsed_base_url()?;
        let periods = [
            ("timeout_ms", self.timeout_ms),
            ("list_interval_ms", self.list_interval_ms),
            ("detail_interval_ms", self.detail_interval_ms),
        ];
        for (field, value) in periods {
            if value == 0 {
                return Err(ConsoleError::invalid_input(field).with_reason("must be greater than zero"));
            }
        }
        if self.page_size == 0 {
            return Err(ConsoleError::invalid_input("page_size").with_reason("must be greater than zero"));
        }
        Ok(())
    }

    /// Base URL as a parsed `Url`.
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| ConsoleError::Configuration {
            message: format!("invalid base URL '{}': {e}", self.base_url),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConsoleError::Configuration {
                message: format!("unsupported URL scheme '{}'", url.scheme()),
            });
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn list_interval(&self) -> Duration {
        Duration::from_millis(self.list_interval_ms)
    }

    pub fn detail_interval(&self) -> Duration {
        Duration::from_millis(self.detail_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.list_interval(), Duration::from_millis(5000));
        assert_eq!(config.detail_interval(), Duration::from_millis(2000));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.page_size, 10);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_url": "https://console.example.com/wise/api", "detail_interval_ms": 1000}}"#
        )
        .unwrap();

        let config = ConsoleConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "https://console.example.com/wise/api");
        assert_eq!(config.detail_interval_ms, 1000);
        assert_eq!(config.list_interval_ms, DEFAULT_LIST_INTERVAL_MS);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConsoleConfig::load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, ConsoleError::FileSystem { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = ConsoleConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConsoleError::Configuration { .. })
        ));

        let config = ConsoleConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ConsoleConfig {
            list_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConsoleError::InvalidInput { .. })
        ));
    }
}
