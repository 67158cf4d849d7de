//! Configuration service implementation.
//!
//! Loads the client configuration from `~/.config/shopfront/client.toml`,
//! falling back to environment variables and then built-in defaults.
//!
//! Priority: client.toml > environment variables > defaults

use crate::paths::{PathError, ShopfrontPaths};
use shopfront_core::config::{ClientConfig, ClientSettings};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;

pub const ENV_BASE_URL: &str = "SHOPFRONT_API_BASE_URL";
pub const ENV_ORIGIN: &str = "SHOPFRONT_ORIGIN";
pub const ENV_TIMEOUT_SECS: &str = "SHOPFRONT_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Failed to read configuration file at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Configuration service that loads and caches the client configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file location; `None` means the platform default.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file and environment.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform default `client.toml`.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading the given file instead of the default location.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the client configuration, loading it if not cached.
    pub fn get_config(&self) -> Result<ClientConfig, ConfigError> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let file_settings = match &self.path {
            Some(path) => Self::load_file(path)?,
            None => Self::load_file(&ShopfrontPaths::client_config_file()?)?,
        };
        let env_settings = Self::settings_from_vars(|key| std::env::var(key).ok())?;
        let loaded = ClientConfig::from_settings(file_settings.or(env_settings));

        tracing::info!(
            "[ConfigService] API base URL: {}, timeout: {}s",
            loaded.base_url,
            loaded.timeout.as_secs()
        );

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Reads one settings layer from a TOML file. A missing file is an empty layer.
    pub fn load_file(path: &Path) -> Result<ClientSettings, ConfigError> {
        if !path.exists() {
            tracing::debug!("[ConfigService] No config file at {}", path.display());
            return Ok(ClientSettings::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the environment layer from a variable lookup.
    pub fn settings_from_vars<F>(lookup: F) -> Result<ClientSettings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = match lookup(ENV_TIMEOUT_SECS).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(ClientSettings {
            base_url: lookup(ENV_BASE_URL),
            origin: lookup(ENV_ORIGIN),
            timeout_secs,
        })
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
