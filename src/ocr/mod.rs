//! OCR engine interface.
//!
//! The OCR engine is an external collaborator: model loading is expensive,
//! so an engine is initialized once per process and shared read-only across
//! pipeline runs as a [`SharedOcrEngine`] handle. The pipeline never
//! mutates engine configuration after construction.
//!
//! Two retrieval modes exist. The PDF fallback path needs no geometry and
//! uses [`OcrEngine::recognize_plain`]; the standalone image path needs
//! word boxes for layout reconstruction and uses
//! [`OcrEngine::recognize_boxes`]. No ordering guarantee is assumed from
//! the box mode; the layout reconstructor imposes order itself.

pub mod preprocess;

pub use preprocess::preprocess;

use crate::error::{Error, Result};
use crate::geometry::Quad;
use image::GrayImage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single recognized word: text, bounding polygon, and confidence.
///
/// Produced once by the OCR engine and never mutated; the layout
/// reconstructor assigns each box to exactly one line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordBox {
    /// Recognized text
    pub text: String,
    /// Bounding polygon, top-left corner first
    pub quad: Quad,
    /// Engine confidence in `0.0..=1.0`
    pub confidence: f32,
}

impl WordBox {
    /// Create a word box.
    pub fn new(text: impl Into<String>, quad: Quad, confidence: f32) -> Self {
        Self {
            text: text.into(),
            quad,
            confidence,
        }
    }
}

/// Interface to an OCR engine.
///
/// Implementations must be safe for concurrent read access: one engine
/// handle may serve several document pipelines at once.
pub trait OcrEngine: Send + Sync {
    /// Recognize text as engine-grouped paragraphs, without geometry.
    fn recognize_plain(&self, image: &GrayImage) -> Result<Vec<String>>;

    /// Recognize text as word boxes with bounding polygons and confidence.
    fn recognize_boxes(&self, image: &GrayImage) -> Result<Vec<WordBox>>;
}

/// Shared, read-only handle to a process-wide OCR engine.
pub type SharedOcrEngine = Arc<dyn OcrEngine>;

/// Engine stand-in for deployments without OCR.
///
/// Every call fails with [`Error::Ocr`], which the pipeline downgrades to
/// an empty page. Selectable-text PDFs and DOCX files extract normally.
#[derive(Debug, Default)]
pub struct NoOcr;

impl OcrEngine for NoOcr {
    fn recognize_plain(&self, _image: &GrayImage) -> Result<Vec<String>> {
        Err(Error::Ocr("no OCR engine configured".to_string()))
    }

    fn recognize_boxes(&self, _image: &GrayImage) -> Result<Vec<WordBox>> {
        Err(Error::Ocr("no OCR engine configured".to_string()))
    }
}
