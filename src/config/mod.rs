//! Configuration module for the practice catalog
//!
//! - Platform-aware path resolution
//! - User settings persistence
//! - Logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::CatalogPaths;
pub use settings::Settings;
