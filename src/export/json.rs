//! JSON export
//!
//! Exports both catalogs to one JSON document with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Publication, Service};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full catalog export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub services: Vec<Service>,

    pub publications: Vec<Publication>,

    pub metadata: ExportMetadata,
}

/// Summary counts and date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub service_count: usize,
    pub publication_count: usize,

    /// Oldest publication date
    pub earliest_publication: Option<String>,

    /// Most recent publication date
    pub latest_publication: Option<String>,
}

impl CatalogExport {
    /// Snapshot the loaded catalogs
    pub fn from_storage(storage: &Storage) -> Self {
        let services = storage.services.all().to_vec();
        let publications = storage.publications.all().to_vec();

        let dates: Vec<_> = publications.iter().filter_map(|p| p.parsed_date()).collect();

        let metadata = ExportMetadata {
            service_count: services.len(),
            publication_count: publications.len(),
            earliest_publication: dates.iter().min().map(|d| d.to_string()),
            latest_publication: dates.iter().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            services,
            publications,
            metadata,
        }
    }

    /// Check the schema version matches this build
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }
        Ok(())
    }
}

/// Export the catalog to JSON
pub fn export_catalog_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> CatalogResult<()> {
    let export = CatalogExport::from_storage(storage);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| CatalogError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export
pub fn read_catalog_json(json_str: &str) -> CatalogResult<CatalogExport> {
    let export: CatalogExport =
        serde_json::from_str(json_str).map_err(|e| CatalogError::Export(e.to_string()))?;

    export.validate().map_err(CatalogError::Export)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_metadata() {
        let storage = Storage::seeded().unwrap();
        let export = CatalogExport::from_storage(&storage);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.service_count, 8);
        assert_eq!(export.metadata.publication_count, 4);
        assert_eq!(export.metadata.earliest_publication.as_deref(), Some("2023-12-15"));
        assert_eq!(export.metadata.latest_publication.as_deref(), Some("2024-02-15"));
    }

    #[test]
    fn test_json_export_reads_back() {
        let storage = Storage::seeded().unwrap();
        let mut output = Vec::new();
        export_catalog_json(&storage, &mut output, true).unwrap();

        let imported = read_catalog_json(&String::from_utf8(output).unwrap()).unwrap();
        assert_eq!(imported.services.len(), 8);
        assert_eq!(imported.publications[0].id.as_str(), "resurgence-article");
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let storage = Storage::seeded().unwrap();
        let mut export = CatalogExport::from_storage(&storage);
        export.schema_version = "0.1.0".into();
        let json = serde_json::to_string(&export).unwrap();

        assert!(read_catalog_json(&json).is_err());
    }
}
