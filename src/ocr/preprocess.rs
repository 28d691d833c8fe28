//! Image preprocessing ahead of OCR.
//!
//! OCR engines do markedly better on clean bilevel input than on raw
//! scans. The transform here is fixed: grayscale conversion, Gaussian
//! denoise, then adaptive thresholding to flatten uneven illumination.

use crate::config::PipelineConfig;
use image::{DynamicImage, GrayImage};
use imageproc::contrast::adaptive_threshold;
use imageproc::filter::gaussian_blur_f32;

/// Prepare an image for OCR: grayscale, denoise, binarize.
///
/// Consumed as an opaque `image -> image` step by both OCR paths; the
/// sigma and threshold radius come from [`PipelineConfig`].
pub fn preprocess(image: &DynamicImage, config: &PipelineConfig) -> GrayImage {
    let gray = image.to_luma8();
    let denoised = gaussian_blur_f32(&gray, config.denoise_sigma);
    adaptive_threshold(&denoised, config.threshold_block_radius)
}
