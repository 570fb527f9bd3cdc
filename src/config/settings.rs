//! User settings for the practice catalog
//!
//! Display counts, date style, download acknowledgment timing and optional
//! overrides for where the catalog files live.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::CatalogPaths;
use crate::error::CatalogError;
use crate::format::DateStyle;
use crate::services::{DEFAULT_FEATURED_COUNT, DEFAULT_RELATED_COUNT};

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Number of publications in the featured strip
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,

    /// Number of entries in the related-services panel
    #[serde(default = "default_related_count")]
    pub related_count: usize,

    /// Seconds the "download started" acknowledgment stays visible
    #[serde(default = "default_download_ack_secs")]
    pub download_ack_secs: u64,

    /// How publication dates are displayed
    #[serde(default)]
    pub date_style: DateStyle,

    /// Services file override (JSON or YAML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_file: Option<PathBuf>,

    /// Publications file override (JSON or YAML)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications_file: Option<PathBuf>,

    /// Default tracing filter when `CATALOG_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_featured_count() -> usize {
    DEFAULT_FEATURED_COUNT
}

fn default_related_count() -> usize {
    DEFAULT_RELATED_COUNT
}

fn default_download_ack_secs() -> u64 {
    2
}

fn default_log_filter() -> String {
    "practice_catalog=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            featured_count: default_featured_count(),
            related_count: default_related_count(),
            download_ack_secs: default_download_ack_secs(),
            date_style: DateStyle::default(),
            services_file: None,
            publications_file: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &CatalogPaths) -> Result<Self, CatalogError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CatalogError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| CatalogError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CatalogPaths) -> Result<(), CatalogError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CatalogError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CatalogError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Services file to read, honoring the override
    pub fn services_path(&self, paths: &CatalogPaths) -> PathBuf {
        self.services_file
            .clone()
            .unwrap_or_else(|| paths.services_file())
    }

    /// Publications file to read, honoring the override
    pub fn publications_path(&self, paths: &CatalogPaths) -> PathBuf {
        self.publications_file
            .clone()
            .unwrap_or_else(|| paths.publications_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.featured_count, 4);
        assert_eq!(settings.related_count, 3);
        assert_eq!(settings.download_ack_secs, 2);
        assert_eq!(settings.date_style, DateStyle::Long);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.date_style = DateStyle::British;
        settings.related_count = 5;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_style, DateStyle::British);
        assert_eq!(loaded.related_count, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"featured_count": 2}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.featured_count, 2);
        assert_eq!(loaded.related_count, 3);
    }

    #[test]
    fn test_file_overrides() {
        let paths = CatalogPaths::with_base_dir(PathBuf::from("/tmp/catalog"));
        let mut settings = Settings::default();
        assert_eq!(settings.services_path(&paths), paths.services_file());

        settings.services_file = Some(PathBuf::from("/srv/site/services.yaml"));
        assert_eq!(
            settings.services_path(&paths),
            PathBuf::from("/srv/site/services.yaml")
        );
    }
}
