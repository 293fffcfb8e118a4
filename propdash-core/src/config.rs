use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default pool size. Kept low for a single-file SQLite store.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Centralized configuration for the propdash server and CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropdashConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub ui: UiSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    /// Allow any CORS origin instead of localhost only
    pub cors_permissive: bool,
    pub request_timeout_secs: u64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3001)),
            cors_permissive: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub path: PathBuf,
    pub max_connections: u32,
    /// Populate the demo data set when the store has no properties
    pub seed_on_startup: bool,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: PropdashConfig::home_dir().join("propdash.db"),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_on_startup: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Directory holding the built dashboard (index.html + assets)
    pub static_dir: Option<PathBuf>,
}

impl PropdashConfig {
    /// Load config from ~/.propdash/config.toml, then apply environment overrides.
    ///
    /// A missing file is not an error: defaults are used.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path, then apply environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::read_file(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Read a config file without applying overrides. Missing file yields defaults.
    pub fn read_file(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Reject values that deserialize fine but would stall or starve the server
    pub fn validate(&self) -> Result<()> {
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "server.request_timeout_secs",
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "database.max_connections",
                value: "0".to_string(),
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Base directory for propdash state: ~/.propdash
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".propdash")
    }

    /// Get config file path: ~/.propdash/config.toml
    pub fn config_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Apply PROPDASH_* environment variables on top of file values
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_with(|var| env::var(var).ok())
    }

    /// Apply overrides from an arbitrary lookup (env in production, a map in tests)
    pub fn apply_overrides_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("PROPDASH_BIND") {
            self.server.bind = bind.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidOverride {
                    var: "PROPDASH_BIND",
                    value: bind.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(path) = lookup("PROPDASH_DB_PATH") {
            self.database.path = PathBuf::from(path);
        }

        if let Some(max) = lookup("PROPDASH_MAX_CONNECTIONS") {
            let parsed: u32 = max.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidOverride {
                    var: "PROPDASH_MAX_CONNECTIONS",
                    value: max.clone(),
                    reason: e.to_string(),
                }
            })?;
            if parsed == 0 {
                return Err(ConfigError::InvalidOverride {
                    var: "PROPDASH_MAX_CONNECTIONS",
                    value: max,
                    reason: "must be at least 1".to_string(),
                });
            }
            self.database.max_connections = parsed;
        }

        if let Some(dir) = lookup("PROPDASH_STATIC_DIR") {
            self.ui.static_dir = Some(PathBuf::from(dir));
        }

        Ok(())
    }

    /// Render the effective config as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
