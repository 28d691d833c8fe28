//! # docpulp
//!
//! Adaptive text extraction for heterogeneous documents (PDF, DOCX,
//! raster images).
//!
//! ## Core Features
//!
//! - **Per-page strategy selection**: selectable PDF text when it exists,
//!   a cheap word-object probe for sparse pages, OCR only as a last
//!   resort.
//! - **Layout reconstruction**: OCR word boxes grouped into lines by
//!   vertical proximity, lines classified into titles and paragraphs.
//! - **Text normalization**: hyphenation repair, URL/email removal,
//!   common OCR misread fixes, and whitespace normalization; running it
//!   twice changes nothing.
//! - **Fault isolation**: a failing page becomes an empty page; the rest
//!   of the document still extracts.
//!
//! The OCR engine, PDF rasterizer, and exporters are external
//! collaborators behind narrow traits, so the pipeline runs the same
//! against production engines and test doubles.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docpulp::ocr::NoOcr;
//! use docpulp::pipeline::ExtractionPipeline;
//! use std::sync::Arc;
//!
//! # fn main() -> docpulp::Result<()> {
//! // Load the OCR engine once per process; NoOcr handles OCR-free runs.
//! let pipeline = ExtractionPipeline::new(Arc::new(NoOcr));
//! let document = pipeline.extract("report.pdf")?;
//! for page in &document.pages {
//!     println!("--- page {} ---\n{}", page.page_no, page.content.as_text());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Output model
pub mod document;

// Layout reconstruction
pub mod geometry;
pub mod layout;

// OCR interface and preprocessing
pub mod ocr;

// Text repair
pub mod text;

// Input backends
pub mod sources;

// Orchestration
pub mod pipeline;

// Re-exports
pub use config::PipelineConfig;
pub use document::{Block, BlockKind, ExtractedDocument, FileKind, Page, PageContent};
pub use error::{Error, Result};
pub use ocr::{OcrEngine, SharedOcrEngine, WordBox};
pub use pipeline::ExtractionPipeline;
pub use text::TextNormalizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }
}
