//! Built-in starter catalog
//!
//! Written to the data directory by `catalog init` so a fresh install has
//! something to browse.

use crate::models::{Publication, Service, ServiceCategory};

struct ServiceSeed {
    id: &'static str,
    title: &'static str,
    category: ServiceCategory,
    short_description: &'static str,
    icon: &'static str,
    icon_color: &'static str,
    features: &'static [&'static str],
}

const SERVICES: &[ServiceSeed] = &[
    ServiceSeed {
        id: "external-audit",
        title: "External Audit",
        category: ServiceCategory::Audit,
        short_description: "Independent statutory audits that give stakeholders confidence.",
        icon: "shield-check",
        icon_color: "text-blue-600",
        features: &["Statutory audits", "Group audits", "Charity audits"],
    },
    ServiceSeed {
        id: "internal-audit",
        title: "Internal Audit",
        category: ServiceCategory::Audit,
        short_description: "Review of controls, risk management and governance.",
        icon: "clipboard-check",
        icon_color: "text-blue-600",
        features: &["Control testing", "Risk assessments", "Process reviews"],
    },
    ServiceSeed {
        id: "due-diligence",
        title: "Due Diligence",
        category: ServiceCategory::Audit,
        short_description: "Financial due diligence for acquisitions and investments.",
        icon: "search",
        icon_color: "text-blue-600",
        features: &["Quality of earnings", "Working capital analysis", "Debt review"],
    },
    ServiceSeed {
        id: "bookkeeping",
        title: "Bookkeeping",
        category: ServiceCategory::Business,
        short_description: "Accurate books kept up to date every month.",
        icon: "book-open",
        icon_color: "text-emerald-600",
        features: &["Monthly reconciliations", "Management accounts", "Cloud accounting setup"],
    },
    ServiceSeed {
        id: "payroll",
        title: "Payroll",
        category: ServiceCategory::Business,
        short_description: "Payroll processing and statutory filings handled end to end.",
        icon: "users",
        icon_color: "text-emerald-600",
        features: &["Payslips", "Pension auto-enrolment", "Year-end returns"],
    },
    ServiceSeed {
        id: "corporate-tax",
        title: "Corporate Tax",
        category: ServiceCategory::Tax,
        short_description: "Corporation tax compliance and planning.",
        icon: "landmark",
        icon_color: "text-amber-600",
        features: &["Tax returns", "R&D claims", "Group relief"],
    },
    ServiceSeed {
        id: "personal-tax",
        title: "Personal Tax",
        category: ServiceCategory::Tax,
        short_description: "Self-assessment and personal tax planning.",
        icon: "user",
        icon_color: "text-amber-600",
        features: &["Self-assessment", "Capital gains", "Inheritance planning"],
    },
    ServiceSeed {
        id: "business-advisory",
        title: "Business Advisory",
        category: ServiceCategory::Advisory,
        short_description: "Strategic advice to help businesses grow.",
        icon: "trending-up",
        icon_color: "text-purple-600",
        features: &["Business planning", "Cash flow forecasting", "Funding support"],
    },
];

/// The starter services, in catalog order
pub fn default_services() -> Vec<Service> {
    SERVICES
        .iter()
        .map(|seed| {
            let mut service = Service::new(
                seed.id,
                seed.title,
                seed.category,
                format!("/services/{}", seed.id),
            );
            service.short_description = seed.short_description.to_string();
            service.icon = seed.icon.to_string();
            service.icon_color = seed.icon_color.to_string();
            service.features = seed.features.iter().map(|f| f.to_string()).collect();
            service.content = format!(
                "<p>{}</p><ul>{}</ul>",
                seed.short_description,
                seed.features
                    .iter()
                    .map(|f| format!("<li>{}</li>", f))
                    .collect::<String>()
            );
            service
        })
        .collect()
}

/// The starter publications, in catalog order
pub fn default_publications() -> Vec<Publication> {
    let mut resurgence = Publication::new(
        "resurgence-article",
        "The Resurgence of Regional Practices",
        "2024-02-15",
        "interview",
    );
    resurgence.description = "Our managing partner on why regional firms are growing again.".into();
    resurgence.source = "Accountancy Today".into();
    resurgence.thumbnail_url = "/images/media/resurgence.jpg".into();
    resurgence.download_url = Some("/files/media/resurgence-article.pdf".into());
    resurgence.file_size = "1.2 MB".into();
    resurgence.featured = Some(true);

    let mut budget = Publication::new(
        "budget-analysis",
        "Spring Budget Analysis",
        "2024-01-20",
        "analysis",
    );
    budget.description = "What the latest budget means for owner-managed businesses.".into();
    budget.source = "Practice Insights".into();
    budget.thumbnail_url = "/images/media/budget.jpg".into();
    budget.download_url = Some("/files/media/budget-analysis.PDF".into());
    budget.file_size = "2.4 MB".into();

    let mut expansion = Publication::new(
        "office-expansion",
        "New Office Opens in the City Centre",
        "2024-01-10",
        "news",
    );
    expansion.description = "The practice opens a second office to serve city clients.".into();
    expansion.source = "Local Business News".into();
    expansion.thumbnail_url = "/images/media/office.jpg".into();
    expansion.download_url = Some("/files/media/office-expansion.docx".into());
    expansion.file_size = "340 KB".into();

    let mut vat = Publication::new(
        "vat-guide",
        "A Practical Guide to VAT Registration",
        "2023-12-15",
        "guide",
    );
    vat.description = "Thresholds, schemes and deadlines explained.".into();
    vat.source = "Practice Insights".into();
    vat.thumbnail_url = "/images/media/vat.jpg".into();
    vat.download_url = Some("/files/media/vat-guide.pdf".into());
    vat.file_size = "860 KB".into();

    vec![resurgence, budget, expansion, vat]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{PublicationRepository, ServiceRepository};

    #[test]
    fn test_seed_catalogs_are_valid() {
        assert!(ServiceRepository::from_records(default_services()).is_ok());
        assert!(PublicationRepository::from_records(default_publications()).is_ok());
    }

    #[test]
    fn test_seed_covers_every_category() {
        let services = default_services();
        for category in ServiceCategory::all() {
            assert!(services.iter().any(|s| s.category == *category));
        }
    }
}
