//! Display labels for publication categories
//!
//! Publication categories are free-form, so the label table is open: known
//! tags get a friendly label and anything else shows its raw identifier.
//! Service categories are a closed enum and label themselves exhaustively
//! (see `ServiceCategory::label`).

use crate::models::PublicationTab;

/// Label shown for the "all" tab on the media page
pub const ALL_PUBLICATIONS_LABEL: &str = "All Publications";

/// Label for a publication category, falling back to the raw id
pub fn publication_category_label(category: &str) -> &str {
    match category {
        "interview" => "Interviews",
        "analysis" => "Analysis",
        "news" => "News",
        "guide" => "Guides",
        "article" => "Articles",
        "report" => "Reports",
        other => other,
    }
}

/// Label for a media-page tab
pub fn tab_label(tab: &PublicationTab) -> &str {
    match tab {
        PublicationTab::All => ALL_PUBLICATIONS_LABEL,
        PublicationTab::Category(c) => publication_category_label(c),
    }
}
