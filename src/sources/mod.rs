//! Input backends: narrow trait interfaces over external document readers.
//!
//! The pipeline only ever talks to [`PageReader`] and [`ParagraphReader`],
//! so both the real backends shipped here and test doubles plug in the
//! same way.

pub mod docx;
pub mod pdf;

pub use docx::{DocxFile, ParagraphReader};
pub use pdf::{LopdfPageReader, PageReader};
