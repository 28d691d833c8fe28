//! Repair and normalization of raw extracted text.
//!
//! Raw OCR (and sometimes selectable-text) output carries predictable
//! damage: words hyphen-broken across line ends, stray URLs and email
//! addresses, a handful of systematic character misreads, and messy
//! whitespace. The normalizer applies four repair stages in a fixed order
//! and is idempotent: normalizing already-normalized text is a no-op.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `word-` + line break + `word`, tolerating trailing/leading blanks
    /// around the break. Hyphen followed by a space on the same line is
    /// intentional punctuation and never matches.
    static ref HYPHEN_BREAK: Regex = Regex::new(r"(\w+)-[ \t]*\n[ \t]*(\w+)").unwrap();

    /// Bare URLs; `www.` counts even without a scheme.
    static ref URL: Regex = Regex::new(r"https?://\S+|www\.\S+").unwrap();

    /// Email-like tokens.
    static ref EMAIL: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();

    /// Standalone `I` misread for `1` directly before a digit.
    static ref MISREAD_I_DIGIT: Regex = Regex::new(r"\bI(\d)").unwrap();

    /// Standalone `l0` misread for `10`.
    static ref MISREAD_L_ZERO: Regex = Regex::new(r"\bl0\b").unwrap();

    /// Standalone `0O` misread for `00`.
    static ref MISREAD_ZERO_O: Regex = Regex::new(r"\b0O\b").unwrap();

    /// Three or more consecutive newlines.
    static ref BLANK_RUN: Regex = Regex::new(r"\n{3,}").unwrap();

    /// Runs of spaces and tabs within a line.
    static ref INLINE_WS: Regex = Regex::new(r"[ \t]+").unwrap();
}

/// Text normalizer: hyphenation repair, noise removal, common OCR error
/// correction, and whitespace normalization.
///
/// Pure and deterministic: `normalize(normalize(s)) == normalize(s)` for
/// every input.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Create a normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize text, applying the repair stages until a fixpoint.
    ///
    /// A single pass is not idempotent on its own: removing a URL at a
    /// line end can expose a hyphen junction the first stage already
    /// walked past. Every changed pass deletes at least one character or
    /// consumes one of the substitutable letters (`I`, `l`, `O`), so the
    /// loop terminates.
    pub fn normalize(&self, text: &str) -> String {
        let mut current = self.pass(text);
        loop {
            let next = self.pass(&current);
            if next == current {
                return next;
            }
            current = next;
        }
    }

    /// One application of the four stages, in their fixed order.
    fn pass(&self, text: &str) -> String {
        let repaired = self.repair_hyphenation(text);
        let denoised = self.remove_noise(&repaired);
        let corrected = self.correct_common_errors(&denoised);
        self.normalize_whitespace(&corrected)
    }

    /// Rejoin words broken across a line end with a hyphen.
    fn repair_hyphenation(&self, text: &str) -> String {
        HYPHEN_BREAK.replace_all(text, "${1}${2}").into_owned()
    }

    /// Strip bare URLs and email-like tokens outright; surrounding
    /// whitespace is left for the whitespace stage to tidy.
    fn remove_noise(&self, text: &str) -> String {
        let without_urls = URL.replace_all(text, "");
        EMAIL.replace_all(&without_urls, "").into_owned()
    }

    /// Fix a fixed set of frequent OCR misreads. The substitutions are
    /// order-independent among themselves.
    fn correct_common_errors(&self, text: &str) -> String {
        let fixed = MISREAD_I_DIGIT.replace_all(text, "1${1}");
        let fixed = MISREAD_L_ZERO.replace_all(&fixed, "10");
        MISREAD_ZERO_O.replace_all(&fixed, "00").into_owned()
    }

    /// Collapse intra-line space runs, trim each line, cap blank-line runs
    /// at one (two newlines, the paragraph-separator convention), and trim
    /// the whole result.
    ///
    /// Lines are trimmed before blank runs are collapsed: a line of only
    /// spaces must count as blank first, or the collapse would miss it.
    fn normalize_whitespace(&self, text: &str) -> String {
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| INLINE_WS.replace_all(line, " ").trim().to_string())
            .collect();
        let joined = lines.join("\n");
        BLANK_RUN.replace_all(&joined, "\n\n").trim().to_string()
    }
}
