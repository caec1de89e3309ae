//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Static bundle host configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built front-end (index.html, wasm, js)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./myndstrong-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Outbound link audit configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Links probed at the same time
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_retries() -> u32 {
    2
}

fn default_concurrency() -> usize {
    4
}

fn default_user_agent() -> String {
    format!("myndstrong-link-audit/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            concurrency: default_concurrency(),
            user_agent: default_user_agent(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from an explicit path, or the default locations
    ///
    /// Nothing is logged here since logging is configured from the result;
    /// call [`ConfigOrigin::log`] once the subscriber is installed.
    pub fn resolve(path: Option<&Path>) -> Result<(Self, ConfigOrigin), ConfigError> {
        match path {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                let origin = ConfigOrigin {
                    path: Some(path.to_path_buf()),
                    skipped: Vec::new(),
                };
                Ok((config, origin))
            }
            None => Ok(Self::load_default()),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> (Self, ConfigOrigin) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("myndstrong").join("config.toml")),
            Some(PathBuf::from("/etc/myndstrong/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first readable file of `paths`, falling back to the environment
    fn load_first(paths: &[PathBuf]) -> (Self, ConfigOrigin) {
        let mut skipped = Vec::new();

        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        let origin = ConfigOrigin {
                            path: Some(path.clone()),
                            skipped,
                        };
                        return (config, origin);
                    }
                    Err(e) => skipped.push(e),
                }
            }
        }

        (Self::from_env(), ConfigOrigin { path: None, skipped })
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = var("MYNDSTRONG_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("MYNDSTRONG_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dir) = var("MYNDSTRONG_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        // Audit overrides
        if let Some(timeout) = var("MYNDSTRONG_AUDIT_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                self.audit.request_timeout_ms = ms;
            }
        }

        // Logging overrides
        if let Some(level) = var("MYNDSTRONG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("MYNDSTRONG_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where a resolved config came from
#[derive(Debug, Default)]
pub struct ConfigOrigin {
    /// File the config was read from; `None` means defaults plus environment
    pub path: Option<PathBuf>,
    /// Files that existed but failed to load
    pub skipped: Vec<ConfigError>,
}

impl ConfigOrigin {
    pub fn log(&self) {
        for e in &self.skipped {
            tracing::warn!("Skipped config file: {}", e);
        }
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# MyndStrong Configuration
#
# Environment variables override these settings:
# - MYNDSTRONG_HOST
# - MYNDSTRONG_PORT
# - MYNDSTRONG_STATIC_DIR
# - MYNDSTRONG_AUDIT_TIMEOUT_MS
# - MYNDSTRONG_LOG_LEVEL
# - MYNDSTRONG_LOG_FORMAT

[server]
# Address the bundle host binds to
host = "127.0.0.1"
port = 8084

# Directory with the built front-end (trunk build output)
static_dir = "./myndstrong-ui/dist"

# Allowed CORS origins for the catalog API (empty = same origin only)
cors_origins = []

[audit]
# Per-request timeout when probing outbound links (ms)
request_timeout_ms = 10000

# Retries per link after the first attempt fails
max_retries = 2

# Links probed concurrently
concurrency = 4

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config_file_round_trips() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8084);
        assert_eq!(config.server.static_dir, PathBuf::from("./myndstrong-ui/dist"));
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.audit.request_timeout_ms, 10_000);
        assert_eq!(config.audit.max_retries, 2);
        assert_eq!(config.audit.concurrency, 4);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.addr(), "127.0.0.1:8084");
        assert!(config.audit.user_agent.starts_with("myndstrong-link-audit/"));
    }

    #[test]
    fn test_partial_section() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("MYNDSTRONG_PORT", "9100"),
            ("MYNDSTRONG_STATIC_DIR", "/srv/myndstrong"),
            ("MYNDSTRONG_LOG_FORMAT", "json"),
            ("MYNDSTRONG_AUDIT_TIMEOUT_MS", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.static_dir, PathBuf::from("/srv/myndstrong"));
        assert_eq!(config.logging.format, "json");
        // Unparseable numbers keep the previous value
        assert_eq!(config.audit.request_timeout_ms, 10_000);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/myndstrong.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_first_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[server\n").unwrap();
        std::fs::write(&good, "[audit]\nconcurrency = 8\n").unwrap();

        let (config, origin) = Config::load_first(&[missing, broken.clone(), good.clone()]);

        assert_eq!(config.audit.concurrency, 8);
        assert_eq!(origin.path, Some(good));
        assert_eq!(origin.skipped.len(), 1);
        assert!(matches!(
            &origin.skipped[0],
            ConfigError::Parse { path, .. } if *path == broken
        ));
    }

    #[test]
    fn test_load_first_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let (config, origin) = Config::load_first(&[dir.path().join("absent.toml")]);

        assert!(origin.path.is_none());
        assert!(origin.skipped.is_empty());
        assert_eq!(config.audit.max_retries, 2);
    }

    #[test]
    fn test_resolve_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 9001\n").unwrap();

        let (config, origin) = Config::resolve(Some(&path)).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(origin.path, Some(path));

        let missing = dir.path().join("nope.toml");
        assert!(Config::resolve(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = \"eighty\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
