//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod export;
pub mod media;
pub mod service;

pub use export::{handle_export_command, ExportCommands};
pub use media::{handle_media_command, MediaCommands};
pub use service::{handle_service_command, ServiceCommands};
