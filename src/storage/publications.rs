//! Publication repository
//!
//! Holds the publications catalog loaded from `publications.json`.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::CatalogError;
use crate::models::Publication;

use super::file_io::read_data;

/// Repository for the publications catalog
pub struct PublicationRepository {
    path: PathBuf,
    publications: Vec<Publication>,
}

impl PublicationRepository {
    /// Create an empty repository reading from `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            publications: Vec::new(),
        }
    }

    /// Build a repository from in-memory records, enforcing catalog invariants
    pub fn from_records(publications: Vec<Publication>) -> Result<Self, CatalogError> {
        validate_publications(&publications)?;
        Ok(Self {
            path: PathBuf::new(),
            publications,
        })
    }

    /// Load publications from disk
    pub fn load(&mut self) -> Result<(), CatalogError> {
        let publications: Vec<Publication> = read_data(&self.path)?;
        validate_publications(&publications)?;

        tracing::debug!(
            path = %self.path.display(),
            count = publications.len(),
            "loaded publications"
        );
        self.publications = publications;
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// All publications in catalog order
    pub fn all(&self) -> &[Publication] {
        &self.publications
    }

    pub fn count(&self) -> usize {
        self.publications.len()
    }
}

/// Check record validity (including dates) plus unique ids
fn validate_publications(publications: &[Publication]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();

    for publication in publications {
        publication
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        if !ids.insert(publication.id.as_str()) {
            return Err(CatalogError::Duplicate {
                entity_type: "Publication",
                identifier: publication.id.to_string(),
            });
        }
    }

    Ok(())
}
