//! CSV export
//!
//! One table per catalog, spreadsheet-friendly. List fields are joined
//! with `; `.

use std::io::Write;

use crate::error::CatalogResult;
use crate::storage::Storage;

/// Export the services catalog as CSV
pub fn export_services_csv<W: Write>(storage: &Storage, writer: W) -> CatalogResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record([
        "ID",
        "Title",
        "Category",
        "Slug",
        "Short Description",
        "Features",
    ])?;

    for service in storage.services.all() {
        csv.write_record([
            service.id.as_str(),
            service.title.as_str(),
            service.category.id(),
            service.slug.as_str(),
            service.short_description.as_str(),
            service.features.join("; ").as_str(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Export the publications catalog as CSV
pub fn export_publications_csv<W: Write>(storage: &Storage, writer: W) -> CatalogResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record([
        "ID",
        "Title",
        "Date",
        "Source",
        "Category",
        "Download URL",
        "File Size",
        "Featured",
    ])?;

    for publication in storage.publications.all() {
        csv.write_record([
            publication.id.as_str(),
            publication.title.as_str(),
            publication.date.as_str(),
            publication.source.as_str(),
            publication.category.as_str(),
            publication.download_url.as_deref().unwrap_or(""),
            publication.file_size.as_str(),
            if publication.is_featured() { "yes" } else { "no" },
        ])?;
    }

    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_csv() {
        let storage = Storage::seeded().unwrap();
        let mut output = Vec::new();
        export_services_csv(&storage, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("ID,Title,Category"));
        assert!(lines[1].starts_with("external-audit,External Audit,audit,/services/external-audit"));
    }

    #[test]
    fn test_publications_csv() {
        let storage = Storage::seeded().unwrap();
        let mut output = Vec::new();
        export_publications_csv(&storage, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("resurgence-article,The Resurgence of Regional Practices,2024-02-15"));
        assert!(text.lines().nth(1).unwrap().ends_with(",yes"));
    }
}
