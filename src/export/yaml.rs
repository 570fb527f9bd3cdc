//! YAML export
//!
//! Same document as the JSON export, in a form that can be edited by hand
//! and fed back in as a catalog data file.

use std::io::Write;

use crate::error::{CatalogError, CatalogResult};
use crate::export::json::CatalogExport;
use crate::storage::Storage;

/// Export the catalog to YAML
pub fn export_catalog_yaml<W: Write>(storage: &Storage, writer: &mut W) -> CatalogResult<()> {
    let export = CatalogExport::from_storage(storage);

    writeln!(writer, "# Practice catalog export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CatalogError::Export(e.to_string()))?;

    Ok(())
}
