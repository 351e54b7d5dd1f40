//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use lexigraph_server::router::{default_cors_origins, DEFAULT_MAX_BODY_BYTES};
use lexigraph_server::ServerOptions;
use serde::{Deserialize, Serialize};

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lexigraph")
        .join("config.toml")
}

/// Configuration for the CLI and server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub addr: String,
    pub max_body_bytes: usize,
    pub cors_origins: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Also write logs to this file (plain text, appended)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            cors_origins: default_cors_origins(),
            log_level: None,
            log_file: None,
            seed: None,
        }
    }
}

impl Config {
    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[
            "addr",
            "max_body_bytes",
            "cors_origins",
            "log_level",
            "log_file",
            "seed",
        ]
    }

    /// Current value of `key`, `None` when unset
    pub fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let value = match key {
            "addr" => Some(self.addr.clone()),
            "max_body_bytes" => Some(self.max_body_bytes.to_string()),
            "cors_origins" => Some(self.cors_origins.join(",")),
            "log_level" => self.log_level.clone(),
            "log_file" => self.log_file.as_ref().map(|p| p.display().to_string()),
            "seed" => self.seed.as_ref().map(|p| p.display().to_string()),
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        };
        Ok(value)
    }

    /// Set `key` from its string form; an empty value unsets optional keys
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "addr" => {
                if value.is_empty() {
                    anyhow::bail!("addr cannot be empty");
                }
                self.addr = value.to_string();
            }
            "max_body_bytes" => {
                self.max_body_bytes = value
                    .parse()
                    .with_context(|| format!("max_body_bytes must be a number, got {}", value))?;
            }
            "cors_origins" => {
                self.cors_origins = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            }
            "log_level" => {
                if value.is_empty() {
                    self.log_level = None;
                } else if LOG_LEVELS.contains(&value) {
                    self.log_level = Some(value.to_string());
                } else {
                    anyhow::bail!(
                        "log_level must be one of: {}",
                        LOG_LEVELS.join(", ")
                    );
                }
            }
            "log_file" => {
                self.log_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "seed" => {
                self.seed = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }

    pub fn server_options(&self) -> ServerOptions {
        ServerOptions {
            max_body_bytes: self.max_body_bytes,
            cors_origins: self.cors_origins.clone(),
        }
    }
}
