//! Service display formatting
//!
//! Formats services for terminal output: list tables, the detail page with
//! its related-services panel, and the not-found page.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{CategoryFilter, Service};
use crate::services::CategoryCount;

/// Empty-state message for a category with no services
pub const NO_SERVICES: &str = "No services found in this category.";

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Service")]
    title: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Summary")]
    summary: String,
}

/// Format a list of services as a table
pub fn format_service_list(services: &[&Service], filter: CategoryFilter) -> String {
    if services.is_empty() {
        return format!("{}\n", NO_SERVICES);
    }

    let rows = services.iter().map(|s| ServiceRow {
        id: s.id.to_string(),
        title: s.title.clone(),
        category: s.category.label(),
        summary: s.short_description.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{} ({})\n\n{}\n", filter.label(), services.len(), table)
}

/// Format service details with the related-services panel
pub fn format_service_details(service: &Service, related: &[&Service]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", service.title));
    output.push_str(&format!("{}\n", "=".repeat(service.title.chars().count())));
    output.push_str(&format!("  ID:       {}\n", service.id));
    output.push_str(&format!("  Category: {}\n", service.category.label()));
    output.push_str(&format!("  Route:    {}\n", service.slug));

    if !service.short_description.is_empty() {
        output.push_str(&format!("\n{}\n", service.short_description));
    }

    if let Some(description) = &service.description {
        output.push_str(&format!("\n{}\n", description));
    }

    if !service.features.is_empty() {
        output.push_str("\nWhat's included:\n");
        for feature in &service.features {
            output.push_str(&format!("  - {}\n", feature));
        }
    }

    if !related.is_empty() {
        output.push('\n');
        output.push_str(&format_related(related));
    }

    output
}

/// Format the related-services panel
pub fn format_related(related: &[&Service]) -> String {
    if related.is_empty() {
        return "No related services.\n".to_string();
    }

    let mut output = String::from("Related services:\n");
    for (i, service) in related.iter().enumerate() {
        let is_last = i == related.len() - 1;
        let prefix = if is_last { "└── " } else { "├── " };
        output.push_str(&format!(
            "  {}{} ({}) {}\n",
            prefix,
            service.title,
            service.category.label(),
            service.slug
        ));
    }
    output
}

/// Page shown when a service id or slug does not resolve
pub fn format_service_not_found(identifier: &str) -> String {
    format!(
        "Service not found: {}\n\nRun 'catalog service list' to see available services.\n",
        identifier
    )
}

/// Format the category tabs with their counts
pub fn format_category_counts(counts: &[CategoryCount]) -> String {
    let mut output = String::from("Service categories:\n");
    for entry in counts {
        output.push_str(&format!(
            "  {:<10} {:<20} {:>3}\n",
            entry.filter.id(),
            entry.filter.label(),
            entry.count
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceCategory;
    use crate::services::ServiceCatalog;
    use crate::storage::seed;

    #[test]
    fn test_empty_list_message() {
        let output = format_service_list(&[], CategoryFilter::Only(ServiceCategory::Tax));
        assert!(output.contains(NO_SERVICES));
    }

    #[test]
    fn test_list_contains_titles() {
        let services = seed::default_services();
        let catalog = ServiceCatalog::from_slice(&services);
        let tax = catalog.get_by_category(CategoryFilter::Only(ServiceCategory::Tax));

        let output = format_service_list(&tax, CategoryFilter::Only(ServiceCategory::Tax));
        assert!(output.starts_with("Tax Services (2)"));
        assert!(output.contains("Corporate Tax"));
        assert!(output.contains("Personal Tax"));
        assert!(!output.contains("Payroll"));
    }

    #[test]
    fn test_details_include_related() {
        let services = seed::default_services();
        let catalog = ServiceCatalog::from_slice(&services);
        let service = catalog.get_by_id("payroll").unwrap();
        let related = catalog.get_related("payroll", 3);

        let output = format_service_details(service, &related);
        assert!(output.contains("Business Services"));
        assert!(output.contains("Related services:"));
        assert!(output.contains("├── Bookkeeping"));
        assert!(output.contains("└── Internal Audit"));
    }

    #[test]
    fn test_not_found_page() {
        let output = format_service_not_found("legal");
        assert!(output.starts_with("Service not found: legal"));
    }
}
