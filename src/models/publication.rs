//! Publication model
//!
//! Articles, interviews and guides shown in the media gallery. Each record
//! may reference a downloadable file, usually a PDF.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PublicationId;
use crate::format::date::parse_date;

/// A catalog publication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    /// Unique identifier
    pub id: PublicationId,

    /// Publication title
    pub title: String,

    /// Short summary
    #[serde(default)]
    pub description: String,

    /// ISO-8601 publication date
    pub date: String,

    /// Outlet the piece appeared in
    #[serde(default)]
    pub source: String,

    /// Thumbnail image URL
    #[serde(default)]
    pub thumbnail_url: String,

    /// File URL for download or preview
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// Human-readable file size ("2.4 MB")
    #[serde(default)]
    pub file_size: String,

    /// Editorially flagged as featured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    /// Free-form category tag
    pub category: String,
}

impl Publication {
    /// Create a publication with the required fields
    pub fn new(
        id: impl Into<PublicationId>,
        title: impl Into<String>,
        date: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            date: date.into(),
            source: String::new(),
            thumbnail_url: String::new(),
            download_url: None,
            file_size: String::new(),
            featured: None,
            category: category.into(),
        }
    }

    /// The publication date as a calendar date, if it parses
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// Validate the publication record
    pub fn validate(&self) -> Result<(), PublicationValidationError> {
        if self.id.is_blank() {
            return Err(PublicationValidationError::EmptyId);
        }

        if self.title.trim().is_empty() {
            return Err(PublicationValidationError::EmptyTitle(self.id.to_string()));
        }

        if self.parsed_date().is_none() {
            return Err(PublicationValidationError::InvalidDate {
                id: self.id.to_string(),
                date: self.date.clone(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Publication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validation errors for publications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicationValidationError {
    EmptyId,
    EmptyTitle(String),
    InvalidDate { id: String, date: String },
}

impl fmt::Display for PublicationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Publication id cannot be empty"),
            Self::EmptyTitle(id) => write!(f, "Publication '{}' has an empty title", id),
            Self::InvalidDate { id, date } => {
                write!(f, "Publication '{}' has an invalid date: '{}'", id, date)
            }
        }
    }
}

impl std::error::Error for PublicationValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_date() {
        let publication = Publication::new("p1", "Title", "2024-02-15", "news");
        assert_eq!(
            publication.parsed_date(),
            NaiveDate::from_ymd_opt(2024, 2, 15)
        );
        assert!(!publication.is_featured());
    }

    #[test]
    fn test_invalid_date_rejected() {
        let publication = Publication::new("p1", "Title", "15/02/2024", "news");
        assert!(matches!(
            publication.validate(),
            Err(PublicationValidationError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "resurgence-article",
            "title": "Resurgence",
            "description": "Interview",
            "date": "2024-02-15",
            "source": "Business Weekly",
            "thumbnailUrl": "/images/resurgence.jpg",
            "downloadUrl": "/files/resurgence.PDF",
            "fileSize": "1.2 MB",
            "featured": true,
            "category": "interview"
        }"#;

        let publication: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(publication.download_url.as_deref(), Some("/files/resurgence.PDF"));
        assert_eq!(publication.file_size, "1.2 MB");
        assert!(publication.is_featured());
        assert!(publication.validate().is_ok());
    }
}
