//! Core data models for the practice catalog
//!
//! This module contains the two record types (services and publications),
//! their id wrappers, and the category types used to filter them.

pub mod category;
pub mod ids;
pub mod publication;
pub mod service;

pub use category::{CategoryFilter, CategoryParseError, PublicationTab, ServiceCategory, ALL};
pub use ids::{PublicationId, ServiceId};
pub use publication::{Publication, PublicationValidationError};
pub use service::{Service, ServiceValidationError};
