//! Path management for the practice catalog
//!
//! ## Path Resolution Order
//!
//! 1. `PRACTICE_CATALOG_DIR` environment variable (if set)
//! 2. The platform config directory (`$XDG_CONFIG_HOME/practice-catalog`,
//!    `~/Library/Application Support/practice-catalog`, `%APPDATA%\practice-catalog`)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CatalogError;

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "PRACTICE_CATALOG_DIR";

const APP_DIR_NAME: &str = "practice-catalog";

/// Manages all paths used by the catalog
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    /// Base directory for settings and data
    base_dir: PathBuf,
}

impl CatalogPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, CatalogError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CatalogPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the catalog data files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default path of the services catalog
    pub fn services_file(&self) -> PathBuf {
        self.data_dir().join("services.json")
    }

    /// Default path of the publications catalog
    pub fn publications_file(&self) -> PathBuf {
        self.data_dir().join("publications.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CatalogError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CatalogError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CatalogError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, CatalogError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CatalogError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.services_file(),
            temp_dir.path().join("data").join("services.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }
}
