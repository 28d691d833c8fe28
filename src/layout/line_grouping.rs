//! Grouping of OCR word boxes into lines.
//!
//! A single-pass greedy clustering: boxes sorted by their reference
//! corner's y-coordinate are assigned to the first open line whose anchor
//! lies within the merge threshold, or open a new line. This is first-fit,
//! not nearest-fit, and the tie-break (earliest-created matching line
//! wins) is load-bearing: the title classifier depends on stable line
//! membership. It tolerates OCR box jitter but can mis-merge dense
//! multi-column text, a known limitation.

use crate::geometry::safe_float_cmp;
use crate::ocr::WordBox;

/// A set of word boxes judged to lie on the same horizontal band.
///
/// `y` is the anchor: the reference-corner y of the first box assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Anchor y-coordinate
    pub y: f32,
    /// Member boxes, sorted ascending by reference-corner x
    pub words: Vec<WordBox>,
}

impl Line {
    /// The line's text: member words joined with single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Partition word boxes into lines by vertical proximity.
///
/// Boxes are sorted ascending by reference-corner y, then each box joins
/// the first open line whose anchor is within `threshold` of the box's y,
/// or opens a new line anchored at its own y. Because input is y-sorted,
/// the returned lines ascend by anchor y (reading order, top to bottom).
/// Finally each line's words are sorted ascending by reference-corner x.
///
/// O(n·L) where L is the open line count; every box lands in exactly one
/// line.
pub fn group_into_lines(mut boxes: Vec<WordBox>, threshold: f32) -> Vec<Line> {
    boxes.sort_by(|a, b| safe_float_cmp(a.quad.top_left().y, b.quad.top_left().y));

    let mut lines: Vec<Line> = Vec::new();
    for word in boxes {
        let y = word.quad.top_left().y;
        // First matching open line wins, not the nearest one.
        match lines.iter_mut().find(|line| (line.y - y).abs() <= threshold) {
            Some(line) => line.words.push(word),
            None => lines.push(Line {
                y,
                words: vec![word],
            }),
        }
    }

    for line in &mut lines {
        line.words
            .sort_by(|a, b| safe_float_cmp(a.quad.top_left().x, b.quad.top_left().x));
    }

    lines
}
