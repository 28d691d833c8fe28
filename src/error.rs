//! Error types for the extraction library.
//!
//! This module defines all error types that can occur while extracting and
//! normalizing document text.

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File extension is not one of the supported document formats.
    ///
    /// Fatal for the whole request: no partial document is produced.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// A single page failed to extract.
    ///
    /// Page-local: the pipeline records an empty page and continues with
    /// the remaining pages.
    #[error("Failed to read page {page}: {reason}")]
    PageRead {
        /// 1-based page number that failed
        page: usize,
        /// Reason for the failure
        reason: String,
    },

    /// The OCR engine itself failed (engine crash, malformed image).
    ///
    /// Treated the same as a page read failure for the affected page.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// A capability the current backend does not provide (e.g. page
    /// rasterization without a renderer).
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// The caller's cancellation check fired at a page boundary.
    #[error("Extraction cancelled")]
    Cancelled,

    /// DOCX container or document structure error
    #[error("DOCX error: {0}")]
    Docx(String),

    /// XML parsing error inside a DOCX document
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// PDF parsing error from the PDF backend
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap any page-local failure with its 1-based page number.
    pub(crate) fn page_read(page: usize, source: impl std::fmt::Display) -> Self {
        Error::PageRead {
            page,
            reason: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message() {
        let err = Error::UnsupportedFormat("txt".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Unsupported file format"));
        assert!(msg.contains("txt"));
    }

    #[test]
    fn test_page_read_message() {
        let err = Error::page_read(2, "rasterization failed");
        let msg = format!("{}", err);
        assert!(msg.contains("page 2"));
        assert!(msg.contains("rasterization failed"));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
