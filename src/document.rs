//! Output model for extracted documents.
//!
//! A pipeline run produces one [`ExtractedDocument`]: an ordered sequence
//! of pages, each carrying either plain text (PDF and DOCX paths) or
//! structured blocks (image/OCR path). The model is built once per run and
//! never mutated afterwards; exporters consume it as-is.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported input formats, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// PDF document (per-page selectable text or OCR fallback)
    Pdf,
    /// Word document (paragraph stream, blank-paragraph page breaks)
    Docx,
    /// Raster image (single page, OCR with layout reconstruction)
    Image,
}

impl FileKind {
    /// Classify a path by its extension.
    ///
    /// Returns [`Error::UnsupportedFormat`] for anything that is not a
    /// PDF, DOCX, or common raster image extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(FileKind::Pdf),
            "docx" => Ok(FileKind::Docx),
            "png" | "jpg" | "jpeg" | "bmp" | "tiff" | "tif" => Ok(FileKind::Image),
            _ => Err(Error::UnsupportedFormat(ext)),
        }
    }
}

/// Structural role of a classified text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Short, fully-uppercase line near the top of the page
    Title,
    /// Everything else
    Paragraph,
}

/// A classified unit of text on the image/OCR path.
///
/// One block per reconstructed line; classification is computed once and
/// not revisited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Structural role
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Space-joined text of the line's words, normalized
    pub text: String,
}

/// Content of a single page, depending on the path the pipeline took.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageContent {
    /// Plain page text (PDF and DOCX paths; no geometry available)
    Text(String),
    /// Structured blocks (image/OCR path)
    Blocks(Vec<Block>),
}

impl PageContent {
    /// Flatten the page content to plain text.
    ///
    /// Blocks join with newlines; exporters that only deal in plain text
    /// use this.
    pub fn as_text(&self) -> String {
        match self {
            PageContent::Text(text) => text.clone(),
            PageContent::Blocks(blocks) => blocks
                .iter()
                .map(|b| b.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// True if the page carries no text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            PageContent::Text(text) => text.is_empty(),
            PageContent::Blocks(blocks) => blocks.iter().all(|b| b.text.is_empty()),
        }
    }
}

/// One unit of extracted input: a PDF page, the whole DOCX, or the whole
/// image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based sequential page number, assigned by the pipeline
    pub page_no: usize,
    /// Extracted content
    pub content: PageContent,
}

impl Page {
    /// Create a page with plain text content.
    pub fn text(page_no: usize, text: impl Into<String>) -> Self {
        Self {
            page_no,
            content: PageContent::Text(text.into()),
        }
    }

    /// Create a page with structured block content.
    pub fn blocks(page_no: usize, blocks: Vec<Block>) -> Self {
        Self {
            page_no,
            content: PageContent::Blocks(blocks),
        }
    }
}

/// The ordered result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Source path as given by the caller
    pub source: String,
    /// Detected input format
    pub kind: FileKind,
    /// Pages in document order; `page_no` values are `1..=N`
    pub pages: Vec<Page>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_path() {
        assert_eq!(FileKind::from_path(Path::new("a.pdf")).unwrap(), FileKind::Pdf);
        assert_eq!(FileKind::from_path(Path::new("a.DOCX")).unwrap(), FileKind::Docx);
        assert_eq!(FileKind::from_path(Path::new("scan.jpeg")).unwrap(), FileKind::Image);
    }

    #[test]
    fn test_file_kind_unsupported() {
        let err = FileKind::from_path(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref ext) if ext == "txt"));

        assert!(FileKind::from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn test_page_content_as_text() {
        let page = Page::blocks(
            1,
            vec![
                Block {
                    kind: BlockKind::Title,
                    text: "HEADING".to_string(),
                },
                Block {
                    kind: BlockKind::Paragraph,
                    text: "Body text.".to_string(),
                },
            ],
        );
        assert_eq!(page.content.as_text(), "HEADING\nBody text.");
        assert!(!page.content.is_empty());
    }

    #[test]
    fn test_empty_content() {
        assert!(PageContent::Text(String::new()).is_empty());
        assert!(PageContent::Blocks(vec![]).is_empty());
    }

    #[test]
    fn test_block_serialization_uses_type_tag() {
        let block = Block {
            kind: BlockKind::Title,
            text: "CHAPTER ONE".to_string(),
        };
        let json = serde_json::to_string(&block).unwrap();
        assert!(json.contains("\"type\":\"title\""));
    }
}
