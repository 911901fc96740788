//! Output Writer — renders the recovered record and persists it.

use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::AppError;

pub const FAILURE_NOTICE: &str = "Failed to extract valid JSON from the response";

/// Pretty JSON: 2-space indent, non-ASCII kept as-is, key order preserved.
pub fn render_record(record: &Map<String, Value>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Writes the rendered record to `path`, replacing any existing file.
/// Same record in, same bytes out.
pub fn write_record(path: &Path, record: &Map<String, Value>) -> Result<(), AppError> {
    let rendered = render_record(record).map_err(|e| AppError::Output {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    std::fs::write(path, rendered).map_err(|source| AppError::Output {
        path: path.to_path_buf(),
        source,
    })
}
