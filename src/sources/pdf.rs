//! PDF page reading.
//!
//! The pipeline consumes PDF pages through the [`PageReader`] trait:
//! per-page selectable text, a cheap word-object probe, and on-demand
//! rasterization for the OCR fallback. The shipped [`LopdfPageReader`]
//! covers the first two; rasterization needs a renderer backend the
//! caller supplies, so it reports [`Error::Unsupported`] and the pipeline
//! records the page as empty instead of failing the document.

use crate::error::{Error, Result};
use image::DynamicImage;
use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};
use std::path::Path;

/// Per-page access to a PDF document.
pub trait PageReader {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Selectable text of a page (0-based index), if any can be decoded.
    ///
    /// `None` means the page has no extractable content stream text; the
    /// caller decides whether to probe further or fall back to OCR.
    fn selectable_text(&self, page_index: usize) -> Result<Option<String>>;

    /// Raw text-showing operands of a page's content stream.
    ///
    /// A cheap probe: a non-empty result proves the page carries real
    /// selectable content even when the decoded text came out empty or
    /// whitespace-only (font encoding quirks).
    fn word_objects(&self, page_index: usize) -> Result<Vec<String>>;

    /// Rasterize a page to an image at the given resolution.
    fn rasterize(&self, page_index: usize, dpi: u32) -> Result<DynamicImage>;
}

/// [`PageReader`] backed by `lopdf`.
pub struct LopdfPageReader {
    doc: Document,
    /// (1-based page number, page object id) in document order
    pages: Vec<(u32, ObjectId)>,
}

impl LopdfPageReader {
    /// Load a PDF from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let doc = Document::load(path)?;
        let pages = doc.get_pages().into_iter().collect();
        Ok(Self { doc, pages })
    }

    /// Load a PDF from an in-memory buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(bytes)?;
        let pages = doc.get_pages().into_iter().collect();
        Ok(Self { doc, pages })
    }

    fn page_at(&self, page_index: usize) -> Result<(u32, ObjectId)> {
        self.pages.get(page_index).copied().ok_or_else(|| {
            Error::page_read(page_index + 1, "page index out of range")
        })
    }
}

impl PageReader for LopdfPageReader {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn selectable_text(&self, page_index: usize) -> Result<Option<String>> {
        let (page_number, _) = self.page_at(page_index)?;
        // Decode failures here are not fatal: the page may still be probed
        // for word objects or sent to OCR.
        match self.doc.extract_text(&[page_number]) {
            Ok(text) if !text.is_empty() => Ok(Some(text)),
            Ok(_) => Ok(None),
            Err(err) => {
                log::debug!("page {}: selectable text decode failed: {}", page_number, err);
                Ok(None)
            },
        }
    }

    fn word_objects(&self, page_index: usize) -> Result<Vec<String>> {
        let (page_number, page_id) = self.page_at(page_index)?;
        let data = self
            .doc
            .get_page_content(page_id)
            .map_err(|e| Error::page_read(page_number as usize, e))?;
        let content = Content::decode(&data)
            .map_err(|e| Error::page_read(page_number as usize, e))?;

        let mut words = Vec::new();
        for op in &content.operations {
            match op.operator.as_str() {
                // Tj, ' and " carry a single string operand (for " it is
                // the last of three); TJ carries an array of strings and
                // kerning numbers.
                "Tj" | "'" | "\"" => {
                    for operand in &op.operands {
                        push_string_operand(operand, &mut words);
                    }
                },
                "TJ" => {
                    if let Some(Object::Array(items)) = op.operands.first() {
                        for item in items {
                            push_string_operand(item, &mut words);
                        }
                    }
                },
                _ => {},
            }
        }
        Ok(words)
    }

    fn rasterize(&self, _page_index: usize, _dpi: u32) -> Result<DynamicImage> {
        Err(Error::Unsupported(
            "page rasterization requires a renderer backend".to_string(),
        ))
    }
}

/// Collect a string operand (lossily decoded) if it is non-empty.
fn push_string_operand(operand: &Object, words: &mut Vec<String>) {
    if let Object::String(bytes, _) = operand {
        if !bytes.is_empty() {
            words.push(String::from_utf8_lossy(bytes).into_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::StringFormat;

    #[test]
    fn test_push_string_operand_filters_non_strings() {
        let mut words = Vec::new();
        push_string_operand(&Object::Integer(-20), &mut words);
        push_string_operand(&Object::String(vec![], StringFormat::Literal), &mut words);
        push_string_operand(
            &Object::String(b"Hello".to_vec(), StringFormat::Literal),
            &mut words,
        );
        assert_eq!(words, vec!["Hello".to_string()]);
    }

    #[test]
    fn test_rasterize_unsupported() {
        // Built by hand because rasterize never touches the document.
        let reader = LopdfPageReader {
            doc: Document::with_version("1.5"),
            pages: vec![],
        };
        assert!(matches!(
            reader.rasterize(0, 200),
            Err(Error::Unsupported(_))
        ));
    }
}
