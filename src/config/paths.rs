//! Path management for cotacao-cafe
//!
//! Provides XDG-compliant path resolution for the data directory and the
//! per-profile values file.
//!
//! ## Path Resolution Order
//!
//! 1. `COTACAO_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cotacao-cafe` or `~/.config/cotacao-cafe`
//! 3. Windows: `%APPDATA%\cotacao-cafe`

use std::path::PathBuf;

use crate::error::CotacaoError;

/// Application identifier used to namespace the storage slot
pub const APP_ID: &str = "cotacao-cafe";

/// Version of the persisted values schema. Bumping this orphans old files
/// instead of misreading them.
pub const SCHEMA_VERSION: u32 = 1;

/// Manages all paths used by cotacao-cafe
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Base directory for all cotacao-cafe data
    base_dir: PathBuf,
}

impl AppPaths {
    /// Create a new AppPaths instance
    ///
    /// Path resolution:
    /// 1. `COTACAO_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/cotacao-cafe` or `~/.config/cotacao-cafe`
    /// 3. Windows: `%APPDATA%\cotacao-cafe`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CotacaoError> {
        let base_dir = if let Ok(custom) = std::env::var("COTACAO_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AppPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/cotacao-cafe/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/cotacao-cafe/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the values file for one profile.
    ///
    /// The storage slot is namespaced by application id, schema version, and
    /// profile id (`cotacao-cafe.v1.values.<profile>.json`) so a future schema
    /// bump orphans old data rather than silently misreading it.
    pub fn values_file(&self, profile: &str) -> PathBuf {
        self.data_dir()
            .join(format!("{}.v{}.values.{}.json", APP_ID, SCHEMA_VERSION, profile))
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/cotacao-cafe/)
    /// - Data directory (~/.config/cotacao-cafe/data/)
    pub fn ensure_directories(&self) -> Result<(), CotacaoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CotacaoError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CotacaoError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CotacaoError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| CotacaoError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join(APP_ID))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CotacaoError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CotacaoError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_ID))
}
