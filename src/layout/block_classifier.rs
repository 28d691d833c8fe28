//! Classification of reconstructed lines into titles and paragraphs.
//!
//! OCR output carries no font metadata, so classification is position and
//! shape only: a title is a short, fully-uppercase line near the top of
//! the page. The thresholds are derived against the first-fit line
//! grouping in [`line_grouping`](crate::layout::line_grouping); re-derive
//! them before changing either side.

use crate::config::PipelineConfig;
use crate::document::{Block, BlockKind};
use crate::layout::Line;

/// Classify lines into blocks, one block per line, preserving line order.
///
/// A line is a [`BlockKind::Title`] iff all of:
/// - its text is fully uppercase (at least one alphabetic character, none
///   lowercase),
/// - its character count is below `title_length_ratio` of the mean line
///   length,
/// - it is among the first `title_line_window` lines of the page.
///
/// Everything else is a [`BlockKind::Paragraph`].
pub fn classify_blocks(lines: &[Line], config: &PipelineConfig) -> Vec<Block> {
    if lines.is_empty() {
        return vec![];
    }

    let texts: Vec<String> = lines.iter().map(|line| line.text()).collect();
    let mean_len = texts.iter().map(|t| t.chars().count()).sum::<usize>() as f32
        / texts.len() as f32;

    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let len = text.chars().count() as f32;
            let kind = if index < config.title_line_window
                && is_all_caps(&text)
                && len < config.title_length_ratio * mean_len
            {
                BlockKind::Title
            } else {
                BlockKind::Paragraph
            };
            Block { kind, text }
        })
        .collect()
}

/// True if the text contains at least one letter and no lowercase letters.
fn is_all_caps(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic()) && !text.chars().any(|c| c.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Quad;
    use crate::ocr::WordBox;

    fn line_with_text(text: &str, y: f32) -> Line {
        Line {
            y,
            words: vec![WordBox::new(text, Quad::from_rect(0.0, y, 50.0, 14.0), 0.9)],
        }
    }

    /// Build a page whose mean line length is easy to control: `filler`
    /// lines of exactly 40 characters plus the line under test.
    fn page_with(candidate: &str, position: usize, total: usize) -> Vec<Line> {
        let filler = "x".repeat(40);
        (0..total)
            .map(|i| {
                let text = if i == position { candidate } else { filler.as_str() };
                line_with_text(text, i as f32 * 20.0)
            })
            .collect()
    }

    #[test]
    fn test_short_uppercase_first_line_is_title() {
        let lines = page_with("CHAPTER ONE", 0, 20);
        let blocks = classify_blocks(&lines, &PipelineConfig::default());
        assert_eq!(blocks[0].kind, BlockKind::Title);
        assert_eq!(blocks[0].text, "CHAPTER ONE");
        assert!(blocks[1..].iter().all(|b| b.kind == BlockKind::Paragraph));
    }

    #[test]
    fn test_same_text_deep_in_page_is_paragraph() {
        let lines = page_with("CHAPTER ONE", 9, 20);
        let blocks = classify_blocks(&lines, &PipelineConfig::default());
        assert_eq!(blocks[9].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_lowercase_line_is_not_title() {
        let lines = page_with("chapter one", 0, 20);
        let blocks = classify_blocks(&lines, &PipelineConfig::default());
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_long_uppercase_line_is_not_title() {
        // Uppercase but not short relative to the mean.
        let shout = "THIS LINE IS FAR TOO LONG TO BE A TITLE AT ALL";
        let lines = page_with(shout, 0, 20);
        let blocks = classify_blocks(&lines, &PipelineConfig::default());
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_digits_only_line_is_not_title() {
        // Page numbers and the like: no alphabetic characters.
        let lines = page_with("42", 0, 20);
        let blocks = classify_blocks(&lines, &PipelineConfig::default());
        assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    }

    #[test]
    fn test_empty_input() {
        assert!(classify_blocks(&[], &PipelineConfig::default()).is_empty());
    }

    #[test]
    fn test_block_order_preserves_line_order() {
        let lines = vec![
            line_with_text("first", 0.0),
            line_with_text("second", 20.0),
            line_with_text("third", 40.0),
        ];
        let blocks = classify_blocks(&lines, &PipelineConfig::default());
        let texts: Vec<&str> = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }
}
