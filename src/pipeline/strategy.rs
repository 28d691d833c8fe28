//! Per-page extraction strategy for PDFs.
//!
//! Selectable-text extraction is orders of magnitude cheaper and more
//! accurate than OCR, so the selector tries hard to avoid the fallback:
//! first the decoded text itself, then a cheap word-object probe that
//! catches pages whose text decodes to empty or whitespace despite real
//! content (font encoding quirks). Only a page that fails both goes to
//! OCR.

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::sources::PageReader;

/// The extraction path chosen for one PDF page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageDecision {
    /// Selectable text was long enough; use it verbatim.
    Selectable(String),
    /// Text was short or empty but word objects exist; use the text as-is
    /// (possibly empty) without paying for OCR.
    WordProbe(String),
    /// No selectable content at all: rasterize, preprocess, and OCR.
    OcrFallback,
}

/// Decide the extraction path for one page. First match wins.
///
/// Must not invoke OCR itself; the fallback is only signalled, and the
/// pipeline pays its cost.
pub fn select_strategy(
    reader: &dyn PageReader,
    page_index: usize,
    config: &PipelineConfig,
) -> Result<PageDecision> {
    let text = reader.selectable_text(page_index)?;

    if let Some(t) = &text {
        if t.trim().chars().count() > config.min_selectable_chars {
            log::debug!("page {}: selectable text fast path", page_index + 1);
            return Ok(PageDecision::Selectable(t.clone()));
        }
    }

    if !reader.word_objects(page_index)?.is_empty() {
        log::debug!("page {}: sparse selectable content, skipping OCR", page_index + 1);
        return Ok(PageDecision::WordProbe(text.unwrap_or_default()));
    }

    log::debug!("page {}: no selectable content, OCR fallback", page_index + 1);
    Ok(PageDecision::OcrFallback)
}
