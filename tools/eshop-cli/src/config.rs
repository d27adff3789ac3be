//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["eshop.toml", ".eshop.toml", "eshop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Backend connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Session persistence.
    #[serde(default)]
    pub session: SessionConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin, without the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where the login session is kept between invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session file path. Defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Generate a default eshop.toml config file.
pub fn generate_default_config(base_url: &str) -> String {
    format!(
        r#"# E-Shop CLI configuration

[api]
base_url = "{base_url}"
timeout_secs = 30

[session]
# file = "~/.local/share/eshop/session.json"
"#,
        base_url = base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config = CliConfig::parse("eshop.toml", "").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.session.file.is_none());
    }

    #[test]
    fn test_generated_config_parses() {
        let content = generate_default_config("https://shop.example.com");
        let config = CliConfig::parse("eshop.toml", &content).unwrap();
        assert_eq!(config.api.base_url, "https://shop.example.com");
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            "eshop.json",
            r#"{"api": {"base_url": "http://api.test"}, "session": {"file": "/tmp/s.json"}}"#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://api.test");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.session.file.as_deref(), Some("/tmp/s.json"));
    }
}
