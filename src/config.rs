//! Server configuration.
//!
//! Priority: CLI flag / env var  >  TOML config file  >  built-in default.

use std::path::Path;

use serde::Deserialize;
use tracing::error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FORMAT: &str = "pretty";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port (default: 8080).
    pub port: u16,
    /// Bind address (default: "127.0.0.1"; use "0.0.0.0" for LAN access).
    pub bind_address: String,
    /// Log level filter string, e.g. "debug", "info,taskd=trace".
    pub log_level: String,
    /// Log output format: "pretty" (human-readable) | "json" (structured).
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: default_bind_address(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl ServerConfig {
    /// Resolve the effective configuration from CLI/env overrides and an
    /// optional TOML file. Overrides win over the file; the file wins over
    /// defaults.
    pub fn resolve(
        config_file: Option<&Path>,
        port: Option<u16>,
        bind_address: Option<String>,
        log_level: Option<String>,
        log_format: Option<String>,
    ) -> Self {
        let file = config_file.and_then(load_toml).unwrap_or_default();
        let defaults = Self::default();
        Self {
            port: port.or(file.port).unwrap_or(defaults.port),
            bind_address: bind_address
                .or(file.bind_address)
                .unwrap_or(defaults.bind_address),
            log_level: log_level.or(file.log).unwrap_or(defaults.log_level),
            log_format: log_format
                .or(file.log_format)
                .unwrap_or(defaults.log_format),
        }
    }
}

/// TOML config file — all fields are optional overrides.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// HTTP listen port (default: 8080).
    port: Option<u16>,
    /// Bind address (default: "127.0.0.1").
    bind_address: Option<String>,
    /// Log level filter string (default: "info").
    log: Option<String>,
    /// Log output format: "pretty" | "json" (default: "pretty").
    log_format: Option<String>,
}

fn load_toml(path: &Path) -> Option<TomlConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config file — using defaults");
            None
        }
    }
}
