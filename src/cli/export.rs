//! CLI commands for catalog export

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, CatalogResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (both catalogs)
    Json,
    /// YAML format (both catalogs, hand-editable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export both catalogs to one document
    All {
        /// Output file path (stdout when omitted)
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export services to CSV
    Services {
        /// Output file path (stdout when omitted)
        output: Option<PathBuf>,
    },

    /// Export publications to CSV
    Publications {
        /// Output file path (stdout when omitted)
        output: Option<PathBuf>,
    },

    /// Show what an export would contain
    Info,
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> CatalogResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = open_output(output.as_deref())?;
            match format {
                ExportFormat::Json => json::export_catalog_json(storage, &mut writer, pretty)?,
                ExportFormat::Yaml => yaml::export_catalog_yaml(storage, &mut writer)?,
            }
            writer.flush()?;
            report_written(output.as_deref(), "Catalog");
        }
        ExportCommands::Services { output } => {
            let mut writer = open_output(output.as_deref())?;
            csv::export_services_csv(storage, &mut writer)?;
            writer.flush()?;
            report_written(output.as_deref(), "Services");
        }
        ExportCommands::Publications { output } => {
            let mut writer = open_output(output.as_deref())?;
            csv::export_publications_csv(storage, &mut writer)?;
            writer.flush()?;
            report_written(output.as_deref(), "Publications");
        }
        ExportCommands::Info => {
            let export = json::CatalogExport::from_storage(storage);
            println!("Export Information");
            println!("==================");
            println!("Schema version: {}", json::EXPORT_SCHEMA_VERSION);
            println!("Services:       {}", export.metadata.service_count);
            println!("Publications:   {}", export.metadata.publication_count);
            if let (Some(first), Some(last)) = (
                &export.metadata.earliest_publication,
                &export.metadata.latest_publication,
            ) {
                println!("Date range:     {} to {}", first, last);
            }
        }
    }

    Ok(())
}

fn open_output(output: Option<&Path>) -> CatalogResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CatalogError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            tracing::debug!(path = %path.display(), "writing export");
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn report_written(output: Option<&Path>, what: &str) {
    if let Some(path) = output {
        println!("{} exported to: {}", what, path.display());
    }
}
