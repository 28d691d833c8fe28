//! Geometric primitives for OCR layout reconstruction.
//!
//! OCR engines report each recognized word as a four-corner polygon in
//! image space. Layout reconstruction only ever reasons about the top-left
//! reference corner, so the types here stay deliberately small.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A 2D point in image space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A four-corner polygon around a recognized word.
///
/// Corner order is whatever the OCR engine emitted, except that the first
/// corner is the top-left one, and that corner is the reference point for all
/// line grouping and left-to-right ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    /// Polygon corners, top-left first
    pub corners: [Point; 4],
}

impl Quad {
    /// Create a quad from four corners, top-left first.
    pub fn new(corners: [Point; 4]) -> Self {
        Self { corners }
    }

    /// Build an axis-aligned quad from a top-left corner and dimensions.
    ///
    /// Convenient for tests and for engines that report plain rectangles.
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            corners: [
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
        }
    }

    /// The top-left reference corner.
    pub fn top_left(&self) -> Point {
        self.corners[0]
    }
}

/// Compare two floats without panicking on NaN.
///
/// NaN sorts after every real number and equal to itself, so sorting word
/// boxes by coordinate never panics even on degenerate OCR output.
#[inline]
pub(crate) fn safe_float_cmp(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap(),
    }
}
