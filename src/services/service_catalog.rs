//! Service catalog accessors
//!
//! Read-only queries over the loaded services: lookup, category filter and
//! related-service resolution.

use crate::models::{CategoryFilter, Service, ServiceCategory};
use crate::storage::Storage;

use super::related::resolve_related;

/// Query layer over the service catalog
pub struct ServiceCatalog<'a> {
    services: &'a [Service],
}

/// A category tab with the number of services under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub filter: CategoryFilter,
    pub count: usize,
}

impl<'a> ServiceCatalog<'a> {
    /// Create a catalog view over the loaded storage
    pub fn new(storage: &'a Storage) -> Self {
        Self::from_slice(storage.services.all())
    }

    /// Create a catalog view over an in-memory slice
    pub fn from_slice(services: &'a [Service]) -> Self {
        Self { services }
    }

    /// All services in catalog order
    pub fn all(&self) -> &'a [Service] {
        self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Find a service by id (first match)
    pub fn get_by_id(&self, id: &str) -> Option<&'a Service> {
        self.services.iter().find(|s| s.id.as_str() == id)
    }

    /// Find a service by its route slug
    pub fn get_by_slug(&self, slug: &str) -> Option<&'a Service> {
        let wanted = slug.trim_matches('/');
        self.services
            .iter()
            .find(|s| s.slug.trim_matches('/') == wanted)
    }

    /// Find a service by id, falling back to slug
    pub fn find(&self, identifier: &str) -> Option<&'a Service> {
        self.get_by_id(identifier)
            .or_else(|| self.get_by_slug(identifier))
    }

    /// Services matching the filter, in catalog order
    pub fn get_by_category(&self, filter: CategoryFilter) -> Vec<&'a Service> {
        self.services
            .iter()
            .filter(|s| filter.matches(s.category))
            .collect()
    }

    /// Up to `count` services related to `current_id`
    pub fn get_related(&self, current_id: &str, count: usize) -> Vec<&'a Service> {
        resolve_related(self.services, current_id, count)
    }

    /// Every filter option with its match count, `All` first
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        CategoryFilter::options()
            .into_iter()
            .map(|filter| CategoryCount {
                filter,
                count: self
                    .services
                    .iter()
                    .filter(|s| filter.matches(s.category))
                    .count(),
            })
            .collect()
    }

    /// Services grouped under each category, in category display order
    pub fn grouped(&self) -> Vec<(ServiceCategory, Vec<&'a Service>)> {
        ServiceCategory::all()
            .iter()
            .map(|&c| (c, self.get_by_category(CategoryFilter::Only(c))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed;

    #[test]
    fn test_get_by_id() {
        let services = seed::default_services();
        let catalog = ServiceCatalog::from_slice(&services);

        for service in &services {
            let found = catalog.get_by_id(service.id.as_str()).unwrap();
            assert_eq!(found.id, service.id);
        }
        assert!(catalog.get_by_id("does-not-exist").is_none());
    }

    #[test]
    fn test_get_by_slug_ignores_slashes() {
        let services = seed::default_services();
        let catalog = ServiceCatalog::from_slice(&services);

        let service = catalog.get_by_slug("services/payroll").unwrap();
        assert_eq!(service.id.as_str(), "payroll");
        assert_eq!(catalog.find("/services/payroll/").unwrap().id.as_str(), "payroll");
        assert_eq!(catalog.find("payroll").unwrap().id.as_str(), "payroll");
    }

    #[test]
    fn test_all_filter_returns_full_catalog_in_order() {
        let services = seed::default_services();
        let catalog = ServiceCatalog::from_slice(&services);

        let all = catalog.get_by_category(CategoryFilter::All);
        assert_eq!(all.len(), services.len());
        for (a, b) in all.iter().zip(services.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_category_filter_is_order_preserving_subsequence() {
        let services = seed::default_services();
        let catalog = ServiceCatalog::from_slice(&services);

        for &category in ServiceCategory::all() {
            let filtered = catalog.get_by_category(CategoryFilter::Only(category));
            let expected: Vec<_> = services.iter().filter(|s| s.category == category).collect();
            assert_eq!(filtered, expected);
        }
    }

    #[test]
    fn test_category_counts() {
        let services = seed::default_services();
        let catalog = ServiceCatalog::from_slice(&services);

        let counts = catalog.category_counts();
        assert_eq!(counts[0].filter, CategoryFilter::All);
        assert_eq!(counts[0].count, services.len());
        let sum: usize = counts[1..].iter().map(|c| c.count).sum();
        assert_eq!(sum, services.len());
    }

    #[test]
    fn test_related_for_seed_catalog() {
        let services = seed::default_services();
        let catalog = ServiceCatalog::from_slice(&services);

        let related: Vec<_> = catalog
            .get_related("business-advisory", 3)
            .iter()
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(related, vec!["external-audit", "internal-audit", "due-diligence"]);

        let related: Vec<_> = catalog
            .get_related("bookkeeping", 3)
            .iter()
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(related, vec!["payroll", "external-audit", "internal-audit"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ServiceCatalog::from_slice(&[]);
        assert!(catalog.is_empty());
        assert!(catalog.get_by_category(CategoryFilter::All).is_empty());
        assert!(catalog.get_related("anything", 3).is_empty());
    }
}
