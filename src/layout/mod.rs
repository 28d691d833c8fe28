//! Layout reconstruction from OCR word boxes.
//!
//! OCR output is an unordered bag of word boxes. This module imposes
//! reading order in two steps:
//! - first-fit clustering of boxes into horizontal [`Line`]s by vertical
//!   proximity,
//! - classification of each line into a title or paragraph [`Block`](crate::document::Block)
//!   using a position-and-shape heuristic (no font metadata is available
//!   from OCR output).

pub mod block_classifier;
pub mod line_grouping;

pub use block_classifier::classify_blocks;
pub use line_grouping::{group_into_lines, Line};
