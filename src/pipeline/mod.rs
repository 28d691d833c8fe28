//! Document extraction pipeline.
//!
//! One run per document:
//!
//! ```text
//! input path
//!     ↓ dispatch on extension
//! [PDF path]   per page: strategy selector → text or OCR fallback
//! [DOCX path]  paragraph stream → blank-paragraph page breaks
//! [Image path] OCR boxes → line grouping → block classification
//!     ↓
//! TextNormalizer
//!     ↓
//! ExtractedDocument (pages ordered 1..=N)
//! ```
//!
//! Pages are processed independently: a failure on one page is logged and
//! recorded as an empty page, and the remaining pages continue. Only an
//! unsupported format aborts the whole request.

pub mod strategy;

pub use strategy::{select_strategy, PageDecision};

use crate::config::PipelineConfig;
use crate::document::{ExtractedDocument, FileKind, Page};
use crate::error::{Error, Result};
use crate::layout::{classify_blocks, group_into_lines};
use crate::ocr::{preprocess, SharedOcrEngine};
use crate::sources::{DocxFile, LopdfPageReader, PageReader, ParagraphReader};
use crate::text::TextNormalizer;
use image::DynamicImage;
use std::path::Path;

/// Injectable cancellation check, polled at page boundaries.
pub type CancelCheck = Box<dyn Fn() -> bool + Send + Sync>;

/// The extraction pipeline: dispatches by file type and yields an ordered
/// page sequence.
///
/// Holds a shared OCR engine handle; the engine is the one process-wide
/// resource and is never reconfigured per call. Construct one pipeline per
/// configuration and reuse it across documents.
pub struct ExtractionPipeline {
    config: PipelineConfig,
    ocr: SharedOcrEngine,
    normalizer: TextNormalizer,
    cancel: Option<CancelCheck>,
}

impl ExtractionPipeline {
    /// Create a pipeline with default configuration.
    pub fn new(ocr: SharedOcrEngine) -> Self {
        Self::with_config(ocr, PipelineConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(ocr: SharedOcrEngine, config: PipelineConfig) -> Self {
        Self {
            config,
            ocr,
            normalizer: TextNormalizer::new(),
            cancel: None,
        }
    }

    /// Install a cancellation check.
    ///
    /// The check is polled before each page; when it returns `true` the
    /// run stops with [`Error::Cancelled`]. The pipeline itself implements
    /// no timeouts: callers wrap a run in whatever cancellable unit of
    /// work their environment provides.
    pub fn with_cancel_check(mut self, check: CancelCheck) -> Self {
        self.cancel = Some(check);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Extract a document from disk, dispatching on the file extension.
    ///
    /// [`Error::UnsupportedFormat`] is fatal and yields no partial output;
    /// everything page-local is absorbed into empty pages.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<ExtractedDocument> {
        let path = path.as_ref();
        let kind = FileKind::from_path(path)?;

        let pages = match kind {
            FileKind::Pdf => {
                let reader = LopdfPageReader::open(path)?;
                self.extract_pdf(&reader)?
            },
            FileKind::Docx => {
                let docx = DocxFile::open(path)?;
                self.extract_docx(&docx)?
            },
            FileKind::Image => {
                let image = image::open(path)?;
                self.extract_image(&image)?
            },
        };

        Ok(ExtractedDocument {
            source: path.display().to_string(),
            kind,
            pages,
        })
    }

    /// Extract a document from an in-memory buffer of a known format.
    ///
    /// Same contract as [`extract`](Self::extract) with the dispatch
    /// already decided by the caller.
    pub fn extract_bytes(&self, bytes: &[u8], kind: FileKind) -> Result<ExtractedDocument> {
        let pages = match kind {
            FileKind::Pdf => {
                let reader = LopdfPageReader::from_bytes(bytes)?;
                self.extract_pdf(&reader)?
            },
            FileKind::Docx => {
                let docx = DocxFile::from_bytes(bytes.to_vec());
                self.extract_docx(&docx)?
            },
            FileKind::Image => {
                let image = image::load_from_memory(bytes)?;
                self.extract_image(&image)?
            },
        };

        Ok(ExtractedDocument {
            source: String::new(),
            kind,
            pages,
        })
    }

    /// PDF path: per-page strategy selection with OCR fallback.
    ///
    /// No block structure is produced; the selectable-text path has no
    /// geometry to reconstruct from.
    pub fn extract_pdf(&self, reader: &dyn PageReader) -> Result<Vec<Page>> {
        let mut pages = Vec::with_capacity(reader.page_count());

        for index in 0..reader.page_count() {
            self.check_cancelled()?;
            let page_no = index + 1;
            let text = match self.pdf_page_text(reader, index) {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("page {}: {}; recording empty page", page_no, err);
                    String::new()
                },
            };
            pages.push(Page::text(page_no, self.normalizer.normalize(&text)));
        }

        Ok(pages)
    }

    fn pdf_page_text(&self, reader: &dyn PageReader, index: usize) -> Result<String> {
        match select_strategy(reader, index, &self.config)? {
            PageDecision::Selectable(text) | PageDecision::WordProbe(text) => Ok(text),
            PageDecision::OcrFallback => {
                let image = reader.rasterize(index, self.config.raster_dpi)?;
                let prepared = preprocess(&image, &self.config);
                let paragraphs = self.ocr.recognize_plain(&prepared)?;
                Ok(paragraphs.join(" "))
            },
        }
    }

    /// DOCX path: blank paragraphs break pages.
    ///
    /// Consecutive blanks do not emit empty pages; a trailing non-empty
    /// accumulation becomes the final page even without a trailing blank.
    pub fn extract_docx(&self, reader: &dyn ParagraphReader) -> Result<Vec<Page>> {
        let paragraphs = reader.paragraphs()?;
        let mut pages = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for paragraph in paragraphs {
            self.check_cancelled()?;
            if paragraph.trim().is_empty() {
                if !current.is_empty() {
                    pages.push(self.docx_page(pages.len() + 1, &current));
                    current.clear();
                }
            } else {
                current.push(paragraph);
            }
        }
        if !current.is_empty() {
            pages.push(self.docx_page(pages.len() + 1, &current));
        }

        Ok(pages)
    }

    fn docx_page(&self, page_no: usize, paragraphs: &[String]) -> Page {
        Page::text(page_no, self.normalizer.normalize(&paragraphs.join(" ")))
    }

    /// Image path: one page of classified blocks.
    pub fn extract_image(&self, image: &DynamicImage) -> Result<Vec<Page>> {
        self.check_cancelled()?;

        let prepared = preprocess(image, &self.config);
        let boxes = match self.ocr.recognize_boxes(&prepared) {
            Ok(boxes) => boxes,
            Err(err) => {
                log::warn!("image OCR failed: {}; recording empty page", err);
                return Ok(vec![Page::blocks(1, vec![])]);
            },
        };

        let lines = group_into_lines(boxes, self.config.line_merge_threshold);
        let mut blocks = classify_blocks(&lines, &self.config);
        for block in &mut blocks {
            block.text = self.normalizer.normalize(&block.text);
        }

        Ok(vec![Page::blocks(1, blocks)])
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(check) if check() => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }
}
