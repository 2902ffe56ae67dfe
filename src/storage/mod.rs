//! Storage layer for cotacao-cafe
//!
//! Provides JSON file storage with atomic writes, lenient reads, and
//! automatic directory creation.

pub mod file_io;
pub mod values;

pub use file_io::write_json_atomic;
pub use values::ValuesRepository;

use crate::config::paths::AppPaths;
use crate::error::CotacaoError;

/// Main storage coordinator for one profile
pub struct Storage {
    paths: AppPaths,
    profile: String,
    pub values: ValuesRepository,
}

impl Storage {
    /// Create a new Storage instance for the given profile
    pub fn new(paths: AppPaths, profile: &str) -> Result<Self, CotacaoError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            values: ValuesRepository::new(paths.values_file(profile)),
            profile: profile.to_string(),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// Get the profile this storage is scoped to
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Load all persisted data from disk
    pub fn load(&self) -> Result<(), CotacaoError> {
        self.values.load()
    }
}
