//! Content-service configuration.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`CmsConfig::base_url`].
pub const ENV_BASE_URL: &str = "SARATHI_CMS_URL";
/// Environment variable overriding [`CmsConfig::api_key`].
pub const ENV_API_KEY: &str = "SARATHI_CMS_API_KEY";

/// Connection settings for the hosted content service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Base URL of the content API (e.g. `https://cms.example.com/api`).
    pub base_url: String,

    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra headers sent with every request.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            headers: HashMap::new(),
        }
    }
}

impl CmsConfig {
    /// Create a config for a base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply `SARATHI_CMS_*` environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_BASE_URL).ok(),
            std::env::var(ENV_API_KEY).ok(),
        )
    }

    fn with_overrides(mut self, base_url: Option<String>, api_key: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            bail!("base_url cannot be empty");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("base_url must use http or https: {}", url);
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Request timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
base_url = "https://cms.example.com/api"
api_key = "secret"

[headers]
x-site = "sarathi"
"#
        )
        .unwrap();

        let config = CmsConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.base_url, "https://cms.example.com/api");
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.headers.get("x-site").map(String::as_str), Some("sarathi"));
        config.validate().unwrap();
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"base_url": "http://localhost:9000", "timeout_secs": 3}}"#).unwrap();

        let config = CmsConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(3));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = CmsConfig::load("/nonexistent/sarathi.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let config = CmsConfig::default().with_overrides(
            Some("https://override.example.com".into()),
            Some("  ".into()),
        );
        assert_eq!(config.base_url, "https://override.example.com");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_validate() {
        assert!(CmsConfig::new("").validate().is_err());
        assert!(CmsConfig::new("ftp://cms.example.com").validate().is_err());
        let mut config = CmsConfig::new("https://cms.example.com");
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
