// File: src/config.rs
// Purpose: Configuration parsing from contact-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub forms: FormsConfig,

    #[serde(default)]
    pub page: PageConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Lifetime limits for mounted forms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Forms idle longer than this are unmounted by the sweeper
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,

    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    /// Upper bound on mounted forms; mounting past it evicts the least recently used
    #[serde(default = "default_max_forms")]
    pub max_forms: usize,
}

/// App shell settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_htmx_src")]
    pub htmx_src: String,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_session_ttl_secs() -> u64 {
    30 * 60
}

fn default_sweep_interval_secs() -> u64 {
    60
}

fn default_max_forms() -> usize {
    10_000
}

fn default_htmx_src() -> String {
    "https://unpkg.com/htmx.org@1.9.12".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: default_session_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
            max_forms: default_max_forms(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            htmx_src: default_htmx_src(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./contact-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("contact-form.toml")
    }

    /// Apply `HOST` / `PORT` overrides from the environment
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {port}"))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.forms.session_ttl_secs, 1800);
        assert_eq!(config.forms.max_forms, 10_000);
        assert_eq!(config.page.htmx_src, "https://unpkg.com/htmx.org@1.9.12");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.forms.sweep_interval_secs, 60);
    }

    #[test]
    fn test_partial_sections() {
        let toml = r#"
            [server]
            port = 8080

            [forms]
            session_ttl_secs = 5
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.forms.session_ttl_secs, 5);
        assert_eq!(config.forms.max_forms, 10_000);
    }

    #[test]
    fn test_env_overrides() {
        // single test so no other test observes the process environment change
        let mut config = Config::default();
        std::env::set_var("HOST", "0.0.0.0");
        std::env::set_var("PORT", "8081");
        let applied = config.apply_env();
        assert!(applied.is_ok());
        assert_eq!(config.bind_addr(), "0.0.0.0:8081");

        std::env::set_var("PORT", "abc");
        let err = config.apply_env().unwrap_err();
        assert!(err.to_string().contains("Invalid PORT value: abc"));

        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = Config::load("does/not/exist.toml").unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
