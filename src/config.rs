//! Configuration for the extraction pipeline.

/// Tunable thresholds for the extraction pipeline.
///
/// The defaults are calibrated together: in particular the line merge
/// threshold and the title heuristic depend on each other through line
/// membership, so change one with care.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Minimum stripped character count for selectable PDF text to win
    /// outright, skipping both the word probe and OCR.
    pub min_selectable_chars: usize,

    /// Resolution used when rasterizing a PDF page for OCR fallback.
    pub raster_dpi: u32,

    /// Maximum vertical distance between a word box and an open line's
    /// anchor for the box to join that line.
    pub line_merge_threshold: f32,

    /// A line qualifies as a title only if its length is below this
    /// fraction of the mean line length.
    pub title_length_ratio: f32,

    /// Only the first N lines of a page may be titles.
    pub title_line_window: usize,

    /// Gaussian sigma for the denoise step of OCR preprocessing.
    pub denoise_sigma: f32,

    /// Block radius for adaptive thresholding during OCR preprocessing.
    pub threshold_block_radius: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineConfig {
    /// Create a configuration with default thresholds.
    pub fn new() -> Self {
        Self {
            min_selectable_chars: 50,
            raster_dpi: 200,
            line_merge_threshold: 12.0,
            title_length_ratio: 0.6,
            title_line_window: 3,
            denoise_sigma: 1.5,
            threshold_block_radius: 15,
        }
    }

    /// Set the selectable-text fast-path threshold.
    pub fn with_min_selectable_chars(mut self, chars: usize) -> Self {
        self.min_selectable_chars = chars;
        self
    }

    /// Set the OCR fallback rasterization resolution.
    pub fn with_raster_dpi(mut self, dpi: u32) -> Self {
        self.raster_dpi = dpi;
        self
    }

    /// Set the line grouping vertical threshold.
    pub fn with_line_merge_threshold(mut self, threshold: f32) -> Self {
        self.line_merge_threshold = threshold;
        self
    }

    /// Set the title length ratio.
    pub fn with_title_length_ratio(mut self, ratio: f32) -> Self {
        self.title_length_ratio = ratio;
        self
    }

    /// Set how many leading lines may be classified as titles.
    pub fn with_title_line_window(mut self, lines: usize) -> Self {
        self.title_line_window = lines;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.min_selectable_chars, 50);
        assert_eq!(config.raster_dpi, 200);
        assert_eq!(config.line_merge_threshold, 12.0);
        assert_eq!(config.title_line_window, 3);
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new()
            .with_min_selectable_chars(10)
            .with_raster_dpi(300)
            .with_line_merge_threshold(8.0);
        assert_eq!(config.min_selectable_chars, 10);
        assert_eq!(config.raster_dpi, 300);
        assert_eq!(config.line_merge_threshold, 8.0);
    }
}
