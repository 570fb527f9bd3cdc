//! Service layer for the practice catalog
//!
//! Read-only queries on top of the storage layer: lookups, category
//! filters, related services and the featured-publication selection.

pub mod labels;
pub mod publication_catalog;
pub mod related;
pub mod service_catalog;

pub use labels::{publication_category_label, tab_label};
pub use publication_catalog::{PublicationCatalog, TabEntry, DEFAULT_FEATURED_COUNT};
pub use related::{resolve_related, DEFAULT_RELATED_COUNT};
pub use service_catalog::{CategoryCount, ServiceCatalog};
