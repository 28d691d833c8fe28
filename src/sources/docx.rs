//! DOCX paragraph reading.
//!
//! A DOCX file is a ZIP container; the document body lives in
//! `word/document.xml` as WordprocessingML. The pipeline only needs the
//! ordered paragraph strings, including empty paragraphs (those drive
//! the blank-paragraph page-break heuristic), so the reader walks `<w:p>`
//! and `<w:t>` events and nothing else.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// Ordered paragraph access to a word-processing document.
pub trait ParagraphReader {
    /// All paragraphs in document order, empty ones included.
    fn paragraphs(&self) -> Result<Vec<String>>;
}

/// [`ParagraphReader`] over a DOCX container.
pub struct DocxFile {
    bytes: Vec<u8>,
}

impl DocxFile {
    /// Load a DOCX from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            bytes: std::fs::read(path)?,
        })
    }

    /// Wrap an in-memory DOCX container.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    fn document_xml(&self) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(&self.bytes))
            .map_err(|e| Error::Docx(format!("not a DOCX container: {}", e)))?;
        let mut file = archive
            .by_name("word/document.xml")
            .map_err(|e| Error::Docx(format!("missing word/document.xml: {}", e)))?;
        let mut raw = Vec::new();
        file.read_to_end(&mut raw)?;
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}

impl ParagraphReader for DocxFile {
    fn paragraphs(&self) -> Result<Vec<String>> {
        let xml = self.document_xml()?;
        parse_paragraphs(&xml)
    }
}

/// Walk WordprocessingML events and collect paragraph texts.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                },
                b"w:t" => in_text = true,
                _ => {},
            },
            Event::Empty(e) => match e.name().as_ref() {
                // Self-closed paragraph: empty, but still a paragraph.
                b"w:p" => paragraphs.push(String::new()),
                // Tabs and manual breaks separate words within a run.
                b"w:tab" | b"w:br" if in_paragraph => current.push(' '),
                _ => {},
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                },
                b"w:t" => in_text = false,
                _ => {},
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(paragraphs)
}
