//! Storage initialization
//!
//! Writes the starter catalog on first run, to the files the catalog is
//! actually read from (settings overrides included). Existing files are
//! never overwritten.

use crate::config::paths::CatalogPaths;
use crate::config::settings::Settings;
use crate::error::CatalogError;

use super::file_io::write_data_atomic;
use super::seed::{default_publications, default_services};

/// What `initialize_storage` wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitReport {
    pub services_written: bool,
    pub publications_written: bool,
}

/// Initialize storage for a fresh installation
pub fn initialize_storage(
    paths: &CatalogPaths,
    settings: &Settings,
) -> Result<InitReport, CatalogError> {
    paths.ensure_directories()?;

    let mut report = InitReport::default();

    let services_path = settings.services_path(paths);
    if !services_path.exists() {
        write_data_atomic(&services_path, &default_services())?;
        report.services_written = true;
        tracing::info!(path = %services_path.display(), "wrote starter services");
    }

    let publications_path = settings.publications_path(paths);
    if !publications_path.exists() {
        write_data_atomic(&publications_path, &default_publications())?;
        report.publications_written = true;
        tracing::info!(path = %publications_path.display(), "wrote starter publications");
    }

    Ok(report)
}

/// Check if either catalog file is missing
pub fn needs_initialization(paths: &CatalogPaths, settings: &Settings) -> bool {
    !settings.services_path(paths).exists() || !settings.publications_path(paths).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_writes_both_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        assert!(needs_initialization(&paths, &settings));

        let report = initialize_storage(&paths, &settings).unwrap();
        assert!(report.services_written);
        assert!(report.publications_written);
        assert!(paths.services_file().exists());
        assert!(!needs_initialization(&paths, &settings));
    }

    #[test]
    fn test_initialize_keeps_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        paths.ensure_directories().unwrap();
        std::fs::write(paths.services_file(), "[]").unwrap();

        let report = initialize_storage(&paths, &settings).unwrap();
        assert!(!report.services_written);
        assert!(report.publications_written);
        assert_eq!(std::fs::read_to_string(paths.services_file()).unwrap(), "[]");
    }

    #[test]
    fn test_initialize_honors_file_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            services_file: Some(temp_dir.path().join("custom").join("services.yaml")),
            publications_file: Some(temp_dir.path().join("custom").join("publications.json")),
            ..Settings::default()
        };

        let report = initialize_storage(&paths, &settings).unwrap();
        assert!(report.services_written);
        assert!(report.publications_written);
        assert!(!paths.services_file().exists());
        assert!(!paths.publications_file().exists());
        assert!(!needs_initialization(&paths, &settings));

        let mut storage = Storage::new(&paths, &settings);
        storage.load_all().unwrap();
        assert_eq!(storage.services.count(), 8);
        assert_eq!(storage.publications.count(), 4);
    }
}
