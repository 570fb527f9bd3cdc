//! Derived-value helpers shared by the CLI and TUI
//!
//! - `date`: ISO date to display string
//! - `file_type`: PDF detection for download links

pub mod date;
pub mod file_type;

pub use date::{format_british, format_long, format_with, DateStyle};
pub use file_type::{is_pdf, DownloadAction};
