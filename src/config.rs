/// Configuration module for docshelf.
///
/// Handles loading, validating, and providing default configuration values.
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "docshelf.json";

// ── Default value functions ──────────────────────────────────────────

fn default_docs_root() -> PathBuf {
    PathBuf::from("./docs")
}

fn default_http_bind() -> String {
    "127.0.0.1:1234".to_string()
}

fn default_http_path() -> String {
    "/mcp".to_string()
}

fn default_true() -> bool {
    true
}

// ── Config structs ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Root directory; each immediate subdirectory is a category.
    #[serde(default = "default_docs_root")]
    pub docs_root: PathBuf,

    #[serde(default)]
    pub transport: Transport,

    #[serde(default = "default_http_bind")]
    pub http_bind: String,

    #[serde(default = "default_http_path")]
    pub http_path: String,

    /// Index at startup instead of on the first query.
    #[serde(default = "default_true")]
    pub preload: bool,
}

// ── Default impls ────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_root: default_docs_root(),
            transport: Transport::default(),
            http_bind: default_http_bind(),
            http_path: default_http_path(),
            preload: default_true(),
        }
    }
}

// ── Config implementation ────────────────────────────────────────────

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// If `config_path` is empty, defaults to [`DEFAULT_CONFIG_FILE`].
    /// If the file does not exist, returns a default config and, for the
    /// default path only, writes a template.
    pub fn load(config_path: &str) -> Result<Self> {
        let path = if config_path.is_empty() {
            DEFAULT_CONFIG_FILE
        } else {
            config_path
        };

        if !Path::new(path).exists() {
            info!("{path} not found, using defaults");
            let cfg = Self::default();

            if path == DEFAULT_CONFIG_FILE {
                match cfg.save(path) {
                    Ok(()) => info!("Generated config template: {path}"),
                    Err(e) => warn!("Failed to generate config template: {e}"),
                }
            }

            return Ok(cfg);
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {path}"))?;

        let cfg: Config = match serde_json::from_str(&data) {
            Ok(c) => c,
            Err(e) => {
                warn!("Invalid JSON in {path}: {e}");
                warn!("Using default configuration");
                return Ok(Self::default());
            }
        };

        info!("Loaded configuration from {path}");
        Ok(cfg)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &str) -> Result<()> {
        let data = serde_json::to_string_pretty(self).context("failed to marshal config")?;
        std::fs::write(path, data).with_context(|| format!("failed to write config: {path}"))?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.docs_root.as_os_str().is_empty(),
            "docs_root must not be empty"
        );
        anyhow::ensure!(
            self.http_path.starts_with('/') && self.http_path.len() > 1,
            "http_path must be an absolute path such as /mcp"
        );
        self.bind_addr()?;
        Ok(())
    }

    /// Parsed HTTP listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.http_bind
            .parse()
            .with_context(|| format!("invalid http_bind address: {}", self.http_bind))
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.docs_root, PathBuf::from("./docs"));
        assert_eq!(config.transport, Transport::Stdio);
        assert_eq!(config.http_bind, "127.0.0.1:1234");
        assert_eq!(config.http_path, "/mcp");
        assert!(config.preload);
    }

    #[test]
    fn test_load_from_json() {
        let json = r#"{"docs_root": "/srv/docs", "transport": "http"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.docs_root, PathBuf::from("/srv/docs"));
        assert_eq!(config.transport, Transport::Http);
        // Other fields should have defaults
        assert_eq!(config.http_bind, "127.0.0.1:1234");
        assert!(config.preload);
    }

    #[test]
    fn test_validate_ok() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_bind() {
        let mut config = Config::default();
        config.http_bind = "not an address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_http_path() {
        let mut config = Config::default();
        config.http_path = "mcp".to_string();
        assert!(config.validate().is_err());
        config.http_path = "/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_root() {
        let mut config = Config::default();
        config.docs_root = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_custom_path_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.http_path, "/mcp");
        // Templates are only written for the default file name.
        assert!(!path.exists());
    }

    #[test]
    fn test_load_invalid_json_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert!(config.preload);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");
        let mut config = Config::default();
        config.transport = Transport::Http;
        config.preload = false;
        config.save(path.to_str().unwrap()).unwrap();

        let parsed = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(parsed.transport, Transport::Http);
        assert!(!parsed.preload);
        assert_eq!(parsed.docs_root, config.docs_root);
    }
}
