//! File type detection for download links
//!
//! Whether a link is a PDF decides between the in-app preview and a direct
//! download. This is the only place that inspects `download_url`.

/// True iff the URL ends in `.pdf`, ignoring case. Missing or empty input is false.
pub fn is_pdf(url: Option<&str>) -> bool {
    match url {
        Some(u) if !u.is_empty() => u.to_lowercase().ends_with(".pdf"),
        _ => false,
    }
}

/// What to do when the user asks for a publication's file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadAction {
    /// Open the document preview
    Preview,
    /// Hand the URL to the browser / OS as a plain download
    Direct,
    /// Nothing to download
    Unavailable,
}

impl DownloadAction {
    pub fn for_url(url: Option<&str>) -> Self {
        match url {
            None => Self::Unavailable,
            Some(u) if u.trim().is_empty() => Self::Unavailable,
            Some(_) if is_pdf(url) => Self::Preview,
            Some(_) => Self::Direct,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Preview => "Preview PDF",
            Self::Direct => "Download",
            Self::Unavailable => "No file",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf_case_insensitive() {
        assert!(is_pdf(Some("a.pdf")));
        assert!(is_pdf(Some("a.PDF")));
        assert!(is_pdf(Some("/files/Report.Pdf")));
    }

    #[test]
    fn test_is_pdf_total() {
        assert!(!is_pdf(None));
        assert!(!is_pdf(Some("")));
        assert!(!is_pdf(Some("a.pdf.txt")));
        assert!(!is_pdf(Some("brochure.docx")));
    }

    #[test]
    fn test_download_action() {
        assert_eq!(DownloadAction::for_url(Some("/x.pdf")), DownloadAction::Preview);
        assert_eq!(DownloadAction::for_url(Some("/x.zip")), DownloadAction::Direct);
        assert_eq!(DownloadAction::for_url(Some("")), DownloadAction::Unavailable);
        assert_eq!(DownloadAction::for_url(None), DownloadAction::Unavailable);
    }
}
