//! Service repository
//!
//! Holds the services catalog loaded from `services.json`. The list keeps
//! file order, which is the catalog order every query preserves.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::CatalogError;
use crate::models::Service;

use super::file_io::read_data;

/// Repository for the services catalog
pub struct ServiceRepository {
    path: PathBuf,
    services: Vec<Service>,
}

impl ServiceRepository {
    /// Create an empty repository reading from `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            services: Vec::new(),
        }
    }

    /// Build a repository from in-memory records, enforcing catalog invariants
    pub fn from_records(services: Vec<Service>) -> Result<Self, CatalogError> {
        validate_services(&services)?;
        Ok(Self {
            path: PathBuf::new(),
            services,
        })
    }

    /// Load services from disk
    pub fn load(&mut self) -> Result<(), CatalogError> {
        let services: Vec<Service> = read_data(&self.path)?;
        validate_services(&services)?;

        tracing::debug!(
            path = %self.path.display(),
            count = services.len(),
            "loaded services"
        );
        self.services = services;
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// All services in catalog order
    pub fn all(&self) -> &[Service] {
        &self.services
    }

    pub fn count(&self) -> usize {
        self.services.len()
    }
}

/// Check record validity plus unique ids and slugs
fn validate_services(services: &[Service]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();

    for service in services {
        service
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        if !ids.insert(service.id.as_str()) {
            return Err(CatalogError::Duplicate {
                entity_type: "Service",
                identifier: service.id.to_string(),
            });
        }

        if !slugs.insert(service.slug.as_str()) {
            return Err(CatalogError::Duplicate {
                entity_type: "Service slug",
                identifier: service.slug.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceCategory;
    use crate::storage::file_io::write_data_atomic;
    use crate::storage::seed;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut repo = ServiceRepository::new(temp_dir.path().join("services.json"));
        repo.load().unwrap();
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_load_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("services.json");
        let services = seed::default_services();
        write_data_atomic(&path, &services).unwrap();

        let mut repo = ServiceRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.all(), services.as_slice());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let services = vec![
            Service::new("tax", "Tax", ServiceCategory::Tax, "/services/tax"),
            Service::new("tax", "Tax again", ServiceCategory::Tax, "/services/tax-2"),
        ];
        let err = ServiceRepository::from_records(services).err().unwrap();
        assert!(matches!(err, CatalogError::Duplicate { entity_type: "Service", .. }));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let services = vec![
            Service::new("tax", "Tax", ServiceCategory::Tax, "/services/tax"),
            Service::new("vat", "VAT", ServiceCategory::Tax, "/services/tax"),
        ];
        let err = ServiceRepository::from_records(services).err().unwrap();
        assert!(matches!(
            err,
            CatalogError::Duplicate { entity_type: "Service slug", .. }
        ));
    }

    #[test]
    fn test_invalid_record_rejected() {
        let services = vec![Service::new("tax", "", ServiceCategory::Tax, "/services/tax")];
        let err = ServiceRepository::from_records(services).err().unwrap();
        assert!(err.is_validation());
    }
}
