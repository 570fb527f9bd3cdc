//! Display formatting for terminal output
//!
//! Turns catalog records into tables, detail pages and empty-state
//! messages for the CLI.

pub mod publication;
pub mod service;

pub use publication::{
    format_featured, format_publication_details, format_publication_list,
    format_publication_not_found, format_tabs,
};
pub use service::{
    format_category_counts, format_related, format_service_details, format_service_list,
    format_service_not_found,
};
