//! Service model
//!
//! A service offered by the practice. Services are read-only: they are
//! loaded from the data files once and never modified.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ServiceCategory;
use super::ids::ServiceId;

/// A catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Unique identifier
    pub id: ServiceId,

    /// Service title
    pub title: String,

    /// Long description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// One-line summary used on cards
    pub short_description: String,

    /// Category the service belongs to
    pub category: ServiceCategory,

    /// Route path, also used as an anchor target
    pub slug: String,

    /// Symbolic icon reference
    pub icon: String,

    /// Icon color token
    pub icon_color: String,

    /// Hero image URL (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Bullet-point features
    #[serde(default)]
    pub features: Vec<String>,

    /// Pre-sanitized rich text body
    #[serde(default)]
    pub content: String,
}

impl Service {
    /// Create a service with the required fields; the rest start empty
    pub fn new(
        id: impl Into<ServiceId>,
        title: impl Into<String>,
        category: ServiceCategory,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            short_description: String::new(),
            category,
            slug: slug.into(),
            icon: String::new(),
            icon_color: String::new(),
            image: None,
            features: Vec::new(),
            content: String::new(),
        }
    }

    /// Validate the service record
    pub fn validate(&self) -> Result<(), ServiceValidationError> {
        if self.id.is_blank() {
            return Err(ServiceValidationError::EmptyId);
        }

        if self.title.trim().is_empty() {
            return Err(ServiceValidationError::EmptyTitle(self.id.to_string()));
        }

        if self.slug.trim().is_empty() {
            return Err(ServiceValidationError::EmptySlug(self.id.to_string()));
        }

        Ok(())
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validation errors for services
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceValidationError {
    EmptyId,
    EmptyTitle(String),
    EmptySlug(String),
}

impl fmt::Display for ServiceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Service id cannot be empty"),
            Self::EmptyTitle(id) => write!(f, "Service '{}' has an empty title", id),
            Self::EmptySlug(id) => write!(f, "Service '{}' has an empty slug", id),
        }
    }
}

impl std::error::Error for ServiceValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_service() {
        let service = Service::new("payroll", "Payroll", ServiceCategory::Business, "/services/payroll");
        assert_eq!(service.id.as_str(), "payroll");
        assert_eq!(service.category, ServiceCategory::Business);
        assert!(service.features.is_empty());
        assert!(service.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut service = Service::new("tax", "Tax", ServiceCategory::Tax, "/services/tax");

        service.slug = " ".into();
        assert_eq!(
            service.validate(),
            Err(ServiceValidationError::EmptySlug("tax".into()))
        );

        service.slug = "/services/tax".into();
        service.title = String::new();
        assert_eq!(
            service.validate(),
            Err(ServiceValidationError::EmptyTitle("tax".into()))
        );

        service.id = ServiceId::new("");
        assert_eq!(service.validate(), Err(ServiceValidationError::EmptyId));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "external-audit",
            "title": "External Audit",
            "shortDescription": "Statutory audits",
            "category": "audit",
            "slug": "/services/external-audit",
            "icon": "shield-check",
            "iconColor": "text-blue-600",
            "features": ["Statutory audit", "Group audit"],
            "content": "<p>Audit</p>"
        }"#;

        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.short_description, "Statutory audits");
        assert_eq!(service.icon_color, "text-blue-600");
        assert_eq!(service.features.len(), 2);
        assert!(service.description.is_none());
        assert!(service.image.is_none());
    }
}
