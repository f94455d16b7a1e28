//! Text extraction from produced PDFs
//!
//! Used to check what a rendered artifact actually says: section order,
//! placeholder text, page splitting.
//!
//! # Example
//! ```no_run
//! use typst_engine::inspect::{InspectError, PdfExtractor};
//!
//! fn headings_in_order(pdf_bytes: &[u8]) -> Result<bool, InspectError> {
//!     let document = PdfExtractor::extract_text(pdf_bytes)?;
//!     Ok(document.appear_in_order(&["LANDLORD INFORMATION", "TENANT INFORMATION"]))
//! }
//! ```

use pdf_extract::extract_text_from_mem;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("PDF extraction failed: {0}")]
    ExtractionError(String),

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),
}

/// Main PDF extraction interface
pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract text from PDF bytes, split into pages on form feeds
    pub fn extract_text(pdf_bytes: &[u8]) -> Result<ExtractedDocument, InspectError> {
        let raw_text = extract_text_from_mem(pdf_bytes).map_err(|e| {
            let message = e.to_string();
            let lower = message.to_lowercase();
            if lower.contains("invalid") || lower.contains("malformed") || lower.contains("corrupt")
            {
                InspectError::InvalidPdf(message)
            } else {
                InspectError::ExtractionError(message)
            }
        })?;

        let pages = Self::split_pages(&raw_text);

        Ok(ExtractedDocument { raw_text, pages })
    }

    fn split_pages(text: &str) -> Vec<PageContent> {
        text.split('\x0C')
            .filter(|page| !page.trim().is_empty())
            .enumerate()
            .map(|(idx, page)| PageContent {
                page_number: idx + 1,
                text: page.to_string(),
            })
            .collect()
    }
}

/// Text of a whole PDF, page by page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub raw_text: String,
    pub pages: Vec<PageContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    /// 1-indexed
    pub page_number: usize,
    pub text: String,
}

impl ExtractedDocument {
    /// Whitespace-collapsed text, so wrapped lines still match phrases
    pub fn normalized_text(&self) -> String {
        self.raw_text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.normalized_text().contains(phrase)
    }

    /// True when every phrase occurs, each after the previous one
    pub fn appear_in_order(&self, phrases: &[&str]) -> bool {
        let text = self.normalized_text();
        let mut cursor = 0;

        for phrase in phrases {
            match text[cursor..].find(phrase) {
                Some(offset) => cursor += offset + phrase.len(),
                None => return false,
            }
        }

        true
    }
}
