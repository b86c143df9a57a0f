//! Server configuration.
//!
//! Values are layered: built-in defaults, then a TOML file, then
//! `USERDIR_*` environment variables. CLI flags are applied last by the
//! binary.

use crate::query::DEFAULT_PAGE_SIZE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const ENV_HOST: &str = "USERDIR_HOST";
pub const ENV_PORT: &str = "USERDIR_PORT";
pub const ENV_PAGE_SIZE: &str = "USERDIR_PAGE_SIZE";
pub const ENV_RESPONSE_DELAY_MS: &str = "USERDIR_RESPONSE_DELAY_MS";

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Page length when a request omits or garbles its page size
    pub default_page_size: usize,
    /// Artificial latency before answering list requests (0 = none)
    pub response_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            default_page_size: DEFAULT_PAGE_SIZE,
            response_delay_ms: 0,
        }
    }
}

impl ServerConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `~/.userdir/config.toml`
    /// is read when present. Environment overrides are applied on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::load_from(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse a TOML file without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".userdir").join("config.toml"))
    }

    /// Apply `USERDIR_*` environment overrides. Unparseable values are
    /// logged and ignored.
    pub fn apply_env(&mut self) {
        if let Ok(host) = std::env::var(ENV_HOST) {
            if !host.trim().is_empty() {
                self.host = host.trim().to_string();
            }
        }
        env_override(ENV_PORT, &mut self.port);
        env_override(ENV_PAGE_SIZE, &mut self.default_page_size);
        env_override(ENV_RESPONSE_DELAY_MS, &mut self.response_delay_ms);
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn response_delay(&self) -> Option<Duration> {
        (self.response_delay_ms > 0).then(|| Duration::from_millis(self.response_delay_ms))
    }
}

fn env_override<T: FromStr>(key: &str, target: &mut T) {
    let Ok(raw) = std::env::var(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => tracing::warn!(key, value = %raw, "ignoring unparseable environment override"),
    }
}
