//! Related-service resolution
//!
//! Fills a "related services" panel: services in the same category first,
//! then services from other categories, both in catalog order.

use crate::models::Service;

/// Default number of related services shown
pub const DEFAULT_RELATED_COUNT: usize = 3;

/// Resolve up to `count` services related to `current_id`.
///
/// Returns an empty list when `current_id` is not in `services`. The current
/// service never appears in the result, and every same-category match comes
/// before any cross-category filler.
pub fn resolve_related<'a>(services: &'a [Service], current_id: &str, count: usize) -> Vec<&'a Service> {
    let Some(current) = services.iter().find(|s| s.id.as_str() == current_id) else {
        return Vec::new();
    };

    let same_category: Vec<&Service> = services
        .iter()
        .filter(|s| s.id != current.id && s.category == current.category)
        .collect();

    if same_category.len() >= count {
        return same_category.into_iter().take(count).collect();
    }

    let others = services
        .iter()
        .filter(|s| s.id != current.id && s.category != current.category);

    same_category.into_iter().chain(others).take(count).collect()
}
