use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Value written by `config init` templates before a real key is filled in
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read or write config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub couchpotato: ConnectionConfig,
}

/// Connection parameters for the remote movie-management service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConnectionConfig {
    /// Scheme, host and optional path root, e.g. `http://nas.local/couchpotato`
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub api_key: String,
    /// Also fetch quality profiles and translate them into quality requirements
    #[serde(default)]
    pub include_data: bool,
}

pub fn default_port() -> u16 {
    80
}

impl ConnectionConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            port: default_port(),
            api_key: api_key.into(),
            include_data: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Invalid("base_url is required and cannot be empty".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base_url must start with http:// or https:// (got {})",
                base_url
            )));
        }
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be between 1 and 65535".to_string()));
        }
        if self.api_key.trim().is_empty() || self.api_key == API_KEY_PLACEHOLDER {
            return Err(ConfigError::Invalid("api_key is not configured".to_string()));
        }
        Ok(())
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.couchpotato.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_toml_str(
            r#"
            [couchpotato]
            base_url = "http://localhost"
            api_key = "abc123"
            "#,
        )
        .unwrap();

        assert_eq!(config.couchpotato.port, 80);
        assert!(!config.couchpotato.include_data);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_values() {
        let config = Config::from_toml_str(
            r#"
            [couchpotato]
            base_url = "https://nas.local/cp"
            port = 5050
            api_key = "abc123"
            include_data = true
            "#,
        )
        .unwrap();

        assert_eq!(config.couchpotato.port, 5050);
        assert!(config.couchpotato.include_data);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Config::from_toml_str(
            r#"
            [couchpotato]
            base_url = "http://localhost"
            api_key = "abc123"
            username = "someone"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_required_fields() {
        let missing_key = Config::from_toml_str(
            r#"
            [couchpotato]
            base_url = "http://localhost"
            "#,
        );
        assert!(matches!(missing_key, Err(ConfigError::Parse(_))));

        let missing_url = Config::from_toml_str(
            r#"
            [couchpotato]
            api_key = "abc123"
            "#,
        );
        assert!(matches!(missing_url, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate() {
        let mut config = ConnectionConfig::new("http://localhost", API_KEY_PLACEHOLDER);
        assert!(config.validate().is_err());

        config.api_key = "abc123".to_string();
        assert!(config.validate().is_ok());

        config.base_url = "localhost".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost".to_string();
        config.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            couchpotato: ConnectionConfig {
                base_url: "http://localhost/cp".to_string(),
                port: 5050,
                api_key: "abc123".to_string(),
                include_data: true,
            },
        };

        config.save_to_file(file.path()).unwrap();
        let loaded = Config::load_from_file(file.path()).unwrap();

        assert_eq!(loaded, config);
    }
}
