//! Path management for shopfront configuration files.
//!
//! ```text
//! ~/.config/shopfront/         # Config directory (platform config dir)
//! └── client.toml              # API base URL, origin, timeout
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Platform config directory could not be determined.
    #[error("Cannot find config directory")]
    ConfigDirNotFound,
}

/// Unified path management for shopfront.
pub struct ShopfrontPaths;

impl ShopfrontPaths {
    const APP_DIR: &'static str = "shopfront";

    /// Returns the shopfront configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/shopfront/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the client configuration file.
    pub fn client_config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("client.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_file_is_under_config_dir() {
        // Sandboxed environments may not expose a config dir at all.
        let (Ok(dir), Ok(file)) = (
            ShopfrontPaths::config_dir(),
            ShopfrontPaths::client_config_file(),
        ) else {
            return;
        };
        assert!(dir.ends_with("shopfront"));
        assert!(file.ends_with("client.toml"));
        assert!(file.starts_with(&dir));
    }
}
