//! PDF text extraction — turns a resume file into one page-ordered string.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

/// The only failure this component produces. Missing files, corrupt
/// documents and encrypted documents all surface the same way.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Error reading PDF file: {0}")]
    Read(String),
}

/// Text pulled out of a document, kept alongside its page count for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

impl ExtractedText {
    /// Concatenates pages in order, each followed by a newline.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut page_count = 0;
        for page in pages {
            text.push_str(page.as_ref());
            text.push('\n');
            page_count += 1;
        }
        Self { text, page_count }
    }

    /// True when no page yielded any visible text (e.g. a scanned image PDF).
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Reads `path` and extracts the text of every page.
///
/// The file handle is released before parsing starts. No partial text is
/// ever returned: either every page is extracted or the call fails.
pub fn extract_text_from_pdf(path: &Path) -> Result<ExtractedText, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractionError::Read(e.to_string()))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| ExtractionError::Read(e.to_string()))?;

    let extracted = ExtractedText::from_pages(pages);
    info!(
        pages = extracted.page_count,
        chars = extracted.text.chars().count(),
        "Extracted text from {}",
        path.display()
    );
    Ok(extracted)
}
