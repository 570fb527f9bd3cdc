//! Practice Catalog - services and publications for a professional-services practice
//!
//! This library holds the read-only catalog behind the practice's marketing
//! pages: the services it offers, grouped into four categories, and the
//! publications shown in its media gallery. It answers the questions those
//! pages ask: which services are in a category, which services are related
//! to the one being viewed, which publications are featured, and how dates
//! and download links should be presented.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and logging setup
//! - `error`: Custom error types
//! - `models`: Services, publications and category types
//! - `format`: Date formatting and file-type detection
//! - `storage`: JSON/YAML catalog files
//! - `services`: Catalog queries (filters, related services, featured)
//! - `display`: Terminal formatting for CLI output
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//! - `tui`: Interactive browser
//!
//! # Example
//!
//! ```rust,ignore
//! use practice_catalog::services::ServiceCatalog;
//! use practice_catalog::storage::Storage;
//!
//! let storage = Storage::seeded()?;
//! let catalog = ServiceCatalog::new(&storage);
//! let related = catalog.get_related("external-audit", 3);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::CatalogError;
