// Document text extraction.
// PDF parsing is CPU-bound: async callers must run it inside tokio::task::spawn_blocking.

pub mod pdf;

pub use pdf::{extract_text_from_pdf, ExtractedText, ExtractionError};
