//! File I/O for catalog data files
//!
//! Data files are JSON by default; a `.yaml`/`.yml` extension switches to
//! YAML, for reads and writes alike. Writes go through a temp file and rename
//! so a crash never leaves a half-written catalog behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CatalogError;

/// Serialization format of a data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read a data file, returning a default value if the file doesn't exist
pub fn read_data<T, P>(path: P) -> Result<T, CatalogError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    read_data_required(path)
}

/// Read a data file, returning an error if the file doesn't exist
pub fn read_data_required<T, P>(path: P) -> Result<T, CatalogError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(CatalogError::Storage(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| CatalogError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match DataFormat::from_path(path) {
        DataFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            CatalogError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        }),
        DataFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            CatalogError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

/// Write a data file atomically (write to temp, then rename), in the format
/// its extension selects
pub fn write_data_atomic<T, P>(path: P, data: &T) -> Result<(), CatalogError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CatalogError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let format = DataFormat::from_path(path);
    let temp_path = path.with_extension(match format {
        DataFormat::Json => "json.tmp",
        DataFormat::Yaml => "yaml.tmp",
    });

    let file = File::create(&temp_path)
        .map_err(|e| CatalogError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    match format {
        DataFormat::Json => serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| CatalogError::Storage(format!("Failed to serialize data: {}", e)))?,
        DataFormat::Yaml => serde_yaml::to_writer(&mut writer, data)
            .map_err(|e| CatalogError::Storage(format!("Failed to serialize data: {}", e)))?,
    }

    writer
        .flush()
        .map_err(|e| CatalogError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| CatalogError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CatalogError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
