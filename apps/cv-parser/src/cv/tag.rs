use std::fmt;

use chrono::Utc;
use uuid::Uuid;

const TAG_ID_LEN: usize = 8;

/// Traceability marker injected ahead of the resume text.
/// Carries no meaning for extraction and enforces no uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingTag {
    pub id: String,
    pub timestamp: i64,
}

impl ProcessingTag {
    pub fn new() -> Self {
        let id: String = Uuid::new_v4().to_string().chars().take(TAG_ID_LEN).collect();
        Self {
            id,
            timestamp: Utc::now().timestamp(),
        }
    }
}

impl Default for ProcessingTag {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProcessingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CV_PROCESSING_ID:{}_TIME:{}", self.id, self.timestamp)
    }
}
