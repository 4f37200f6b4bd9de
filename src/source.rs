//! Collaborator contract for page text extraction.
//!
//! PDF parsing is outside this crate; callers supply any implementation that
//! turns raw document bytes into ordered per-page plain text. Empty page
//! strings are valid — downstream heuristics degrade gracefully on them.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("source document could not be decoded: {0}")]
    Decode(String),
    #[error("page extraction failed: {0}")]
    Extraction(String),
}

/// Splits raw document bytes into ordered per-page plain text.
pub trait PageTextSource {
    fn extract_pages(&self, document: &[u8]) -> Result<Vec<String>, SourceError>;
}

/// Reference implementation for plain-text documents: pages separated by
/// form-feed characters, whitespace-trimmed.
pub struct PlainTextSource;

impl PageTextSource for PlainTextSource {
    fn extract_pages(&self, document: &[u8]) -> Result<Vec<String>, SourceError> {
        let text =
            std::str::from_utf8(document).map_err(|e| SourceError::Decode(e.to_string()))?;
        Ok(text
            .split('\u{0c}')
            .map(|page| page.trim().to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_pages_on_form_feed() {
        let pages = PlainTextSource
            .extract_pages("First page.\u{0c}Second page.".as_bytes())
            .unwrap();
        assert_eq!(pages, vec!["First page.", "Second page."]);
    }

    #[test]
    fn single_page_without_separator() {
        let pages = PlainTextSource.extract_pages(b"Just one page.").unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn blank_pages_are_preserved_as_empty_strings() {
        let pages = PlainTextSource
            .extract_pages("Intro.\u{0c}   \u{0c}Outro.".as_bytes())
            .unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages[1].is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let result = PlainTextSource.extract_pages(&[0xFF, 0xFE, 0x00]);
        assert!(matches!(result, Err(SourceError::Decode(_))));
    }
}
