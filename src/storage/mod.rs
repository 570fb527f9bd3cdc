//! Storage layer for the practice catalog
//!
//! Loads the two read-only catalogs from JSON or YAML data files. The
//! `Storage` value is built once at startup and passed by reference to
//! everything that reads the catalog.

pub mod file_io;
pub mod init;
pub mod publications;
pub mod seed;
pub mod services;

pub use file_io::{read_data, write_data_atomic, DataFormat};
pub use init::{initialize_storage, needs_initialization, InitReport};
pub use publications::PublicationRepository;
pub use services::ServiceRepository;

use crate::config::paths::CatalogPaths;
use crate::config::settings::Settings;
use crate::error::CatalogError;

/// Holds both catalogs for the lifetime of the process
pub struct Storage {
    pub services: ServiceRepository,
    pub publications: PublicationRepository,
}

impl Storage {
    /// Create storage pointing at the configured data files
    pub fn new(paths: &CatalogPaths, settings: &Settings) -> Self {
        Self {
            services: ServiceRepository::new(settings.services_path(paths)),
            publications: PublicationRepository::new(settings.publications_path(paths)),
        }
    }

    /// Create storage from in-memory repositories
    pub fn from_parts(services: ServiceRepository, publications: PublicationRepository) -> Self {
        Self {
            services,
            publications,
        }
    }

    /// Storage holding the built-in starter catalog
    pub fn seeded() -> Result<Self, CatalogError> {
        Ok(Self::from_parts(
            ServiceRepository::from_records(seed::default_services())?,
            PublicationRepository::from_records(seed::default_publications())?,
        ))
    }

    /// Load both catalogs from disk
    pub fn load_all(&mut self) -> Result<(), CatalogError> {
        self.services.load()?;
        self.publications.load()?;
        tracing::info!(
            services = self.services.count(),
            publications = self.publications.count(),
            "catalog loaded"
        );
        Ok(())
    }

    /// Whether both catalogs are empty
    pub fn is_empty(&self) -> bool {
        self.services.count() == 0 && self.publications.count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_after_init() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let mut storage = Storage::new(&paths, &settings);
        storage.load_all().unwrap();
        assert!(storage.is_empty());

        initialize_storage(&paths, &settings).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.services.count(), 8);
        assert_eq!(storage.publications.count(), 4);
    }

    #[test]
    fn test_seeded_storage() {
        let storage = Storage::seeded().unwrap();
        assert!(!storage.is_empty());
    }
}
