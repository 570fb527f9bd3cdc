//! Publication display formatting
//!
//! Formats the media gallery for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::format::{format_with, DateStyle, DownloadAction};
use crate::models::{Publication, PublicationTab};
use crate::services::{tab_label, TabEntry};

/// Empty-state message for a tab with no publications
pub const NO_PUBLICATIONS: &str = "No publications found in this category.";

#[derive(Tabled)]
struct PublicationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "File")]
    file: String,
}

fn row(publication: &Publication, style: DateStyle) -> PublicationRow {
    let action = DownloadAction::for_url(publication.download_url.as_deref());
    let file = match action {
        DownloadAction::Unavailable => "-".to_string(),
        _ if publication.file_size.is_empty() => action.label().to_string(),
        _ => format!("{} ({})", action.label(), publication.file_size),
    };

    PublicationRow {
        id: publication.id.to_string(),
        title: publication.title.clone(),
        date: format_with(style, &publication.date),
        source: publication.source.clone(),
        file,
    }
}

/// Format publications under a tab as a table
pub fn format_publication_list(
    publications: &[&Publication],
    tab: &PublicationTab,
    style: DateStyle,
) -> String {
    if publications.is_empty() {
        return format!("{}\n", NO_PUBLICATIONS);
    }

    let mut table = Table::new(publications.iter().map(|p| row(p, style)));
    table.with(Style::psql());

    format!("{} ({})\n\n{}\n", tab_label(tab), publications.len(), table)
}

/// Format the featured strip
pub fn format_featured(publications: &[&Publication], style: DateStyle) -> String {
    if publications.is_empty() {
        return "No publications yet.\n".to_string();
    }

    let mut output = String::from("Featured publications:\n");
    for (i, publication) in publications.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {} - {} ({})\n",
            i + 1,
            publication.title,
            format_with(style, &publication.date),
            publication.source
        ));
    }
    output
}

/// Format the tab strip
pub fn format_tabs(tabs: &[TabEntry]) -> String {
    let mut output = String::from("Media tabs:\n");
    for entry in tabs {
        output.push_str(&format!("  {:<12} {}\n", entry.tab.id(), entry.label));
    }
    output
}

/// Format publication details including what the download action would do
pub fn format_publication_details(publication: &Publication, style: DateStyle) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", publication.title));
    output.push_str(&format!("  ID:       {}\n", publication.id));
    output.push_str(&format!("  Date:     {}\n", format_with(style, &publication.date)));
    output.push_str(&format!("  Source:   {}\n", publication.source));
    output.push_str(&format!("  Category: {}\n", tab_label(&PublicationTab::from_id(&publication.category))));

    if !publication.description.is_empty() {
        output.push_str(&format!("\n{}\n", publication.description));
    }

    let action = DownloadAction::for_url(publication.download_url.as_deref());
    output.push('\n');
    match (action, publication.download_url.as_deref()) {
        (DownloadAction::Unavailable, _) | (_, None) => {
            output.push_str("No downloadable file.\n");
        }
        (action, Some(url)) => {
            output.push_str(&format!("{}: {}", action.label(), url));
            if !publication.file_size.is_empty() {
                output.push_str(&format!(" ({})", publication.file_size));
            }
            output.push('\n');
        }
    }

    output
}

/// Page shown when a publication id does not resolve
pub fn format_publication_not_found(identifier: &str) -> String {
    format!(
        "Publication not found: {}\n\nRun 'catalog media list' to see available publications.\n",
        identifier
    )
}
