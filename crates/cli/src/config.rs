//! CLI configuration
//!
//! Loaded from ~/.paas/config.toml, then overridden by environment variables.
//! The CLI never writes this file; logging in and targeting are done by other
//! tools that share it.

use paas_domain::{OrganizationFields, SpaceFields};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cloud controller endpoint
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,

    /// User account and authentication endpoint
    #[serde(default = "default_uaa_endpoint")]
    pub uaa_endpoint: String,

    /// Bearer token of the authenticated principal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Display name of the authenticated principal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationFields>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<SpaceFields>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Enable colored output
    #[serde(default = "default_colored")]
    pub colored: bool,
}

fn default_api_endpoint() -> String {
    "https://api.paas.local".to_string()
}

fn default_uaa_endpoint() -> String {
    "https://uaa.paas.local".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_colored() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: default_api_endpoint(),
            uaa_endpoint: default_uaa_endpoint(),
            access_token: None,
            username: None,
            organization: None,
            space: None,
            timeout_seconds: default_timeout(),
            colored: default_colored(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(".paas"))
    }

    /// Get the config file path
    pub fn config_file() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default file and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from(&Self::config_file()?)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Override fields from environment variables resolved through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_url) = lookup("PAAS_API_URL") {
            self.api_endpoint = api_url;
        }
        if let Some(uaa_url) = lookup("PAAS_UAA_URL") {
            self.uaa_endpoint = uaa_url;
        }
        if let Some(token) = lookup("PAAS_TOKEN") {
            self.access_token = Some(token);
        }
        if let Some(username) = lookup("PAAS_USERNAME") {
            self.username = Some(username);
        }
        if lookup("NO_COLOR").is_some() {
            self.colored = false;
        }
    }

    /// Check if a session is established
    pub fn is_logged_in(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Display name of the authenticated principal, empty when unknown
    pub fn current_user(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }

    pub fn organization_name(&self) -> &str {
        self.organization
            .as_ref()
            .map(|org| org.name.as_str())
            .unwrap_or_default()
    }

    pub fn space_name(&self) -> &str {
        self.space
            .as_ref()
            .map(|space| space.name.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_endpoint, "https://api.paas.local");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.colored);
        assert!(!config.is_logged_in());
        assert_eq!(config.current_user(), "");
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            api_endpoint = "https://api.example.com"
            access_token = "bearer-token"
            username = "current-user"

            [organization]
            name = "my-org"

            [space]
            name = "my-space"
            guid = "space-guid"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_endpoint, "https://api.example.com");
        assert_eq!(config.uaa_endpoint, "https://uaa.paas.local");
        assert!(config.is_logged_in());
        assert_eq!(config.current_user(), "current-user");
        assert_eq!(config.organization_name(), "my-org");
        assert_eq!(config.space_name(), "my-space");
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let config = Config {
            access_token: Some(String::new()),
            ..Config::default()
        };
        assert!(!config.is_logged_in());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("PAAS_API_URL", "https://api.override"),
            ("PAAS_TOKEN", "env-token"),
            ("PAAS_USERNAME", "env-user"),
            ("NO_COLOR", "1"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_endpoint, "https://api.override");
        assert_eq!(config.uaa_endpoint, "https://uaa.paas.local");
        assert_eq!(config.access_token.as_deref(), Some("env-token"));
        assert_eq!(config.current_user(), "env-user");
        assert!(!config.colored);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("paas-cli-config-does-not-exist.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_endpoint, default_api_endpoint());
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let path = std::env::temp_dir().join(format!("paas-cli-invalid-{}.toml", std::process::id()));
        fs::write(&path, "api_endpoint = [").unwrap();

        let result = Config::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
