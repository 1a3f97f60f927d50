use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::core::error::RateError;

pub const DEFAULT_BASE_URL: &str = "http://data.fixer.io/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixerProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FixerProviderConfig {
    fn default() -> Self {
        FixerProviderConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FixerProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub fixer: FixerProviderConfig,
}

#[derive(Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    /// Access key for the rate service.
    pub fixer_io: Option<String>,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

// Keeps the access key out of `{:?}` output and debug logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("fixer_io", &self.fixer_io.as_ref().map(|_| "<redacted>"))
            .field("providers", &self.providers)
            .finish()
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "xrate", "xrate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// The `fixer_io` access key. Missing or blank keys are a configuration error.
    pub fn access_key(&self) -> Result<&str, RateError> {
        match self.fixer_io.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(RateError::Configuration(
                "access key 'fixer_io' is not set".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
fixer_io: "0123456789abcdef"
providers:
  fixer:
    base_url: "http://example.com/api/"
    timeout_secs: 5
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.access_key().unwrap(), "0123456789abcdef");
        assert_eq!(config.providers.fixer.base_url, "http://example.com/api/");
        assert_eq!(config.providers.fixer.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("fixer_io: abc").expect("Failed to deserialize");
        assert_eq!(config.providers.fixer.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.providers.fixer.timeout_secs, DEFAULT_TIMEOUT_SECS);

        let partial = r#"
fixer_io: abc
providers:
  fixer:
    timeout_secs: 10
"#;
        let config: AppConfig = serde_yaml::from_str(partial).expect("Failed to deserialize");
        assert_eq!(config.providers.fixer.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.providers.fixer.timeout_secs, 10);
    }

    #[test]
    fn test_missing_access_key() {
        let config: AppConfig = serde_yaml::from_str("providers: {}").unwrap();
        let err = config.access_key().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let config: AppConfig = serde_yaml::from_str("fixer_io: '  '").unwrap();
        assert!(config.access_key().is_err());
    }

    #[test]
    fn test_debug_redacts_access_key() {
        let config: AppConfig = serde_yaml::from_str("fixer_io: supersecret").unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("supersecret"));
        assert!(printed.contains("<redacted>"));
    }
}
