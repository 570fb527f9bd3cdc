//! Export module for the practice catalog
//!
//! - JSON: full catalog with schema version
//! - YAML: the same document, hand-editable
//! - CSV: one table per catalog

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_publications_csv, export_services_csv};
pub use json::{export_catalog_json, read_catalog_json, CatalogExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_catalog_yaml;
