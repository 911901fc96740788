use crate::cv::prompts::{CV_EXTRACTION_PROMPT, CV_TEXT_PLACEHOLDER};
use crate::cv::tag::ProcessingTag;

/// Renders the extraction prompt for one document.
///
/// The text is passed through unchanged, whatever its length: the provider's
/// own input limit is the only bound.
pub fn build_prompt(cv_text: &str, tag: &ProcessingTag) -> String {
    let cv_text_with_context = format!("\n{tag}\n{cv_text}\n");
    CV_EXTRACTION_PROMPT.replace(CV_TEXT_PLACEHOLDER, &cv_text_with_context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_tag() -> ProcessingTag {
        ProcessingTag {
            id: "deadbeef".to_string(),
            timestamp: 1_712_345_678,
        }
    }

    #[test]
    fn test_placeholder_is_replaced() {
        let prompt = build_prompt("Jane Doe\nRust Engineer\n", &fixed_tag());
        assert!(!prompt.contains(CV_TEXT_PLACEHOLDER));
        assert!(prompt.contains("Jane Doe\nRust Engineer\n"));
    }

    #[test]
    fn test_tag_line_precedes_resume_text() {
        let prompt = build_prompt("Jane Doe", &fixed_tag());
        let tag_at = prompt
            .find("CV_PROCESSING_ID:deadbeef_TIME:1712345678")
            .unwrap();
        let text_at = prompt.find("Jane Doe").unwrap();
        assert!(tag_at < text_at);
    }

    #[test]
    fn test_instructions_list_all_seven_categories() {
        let prompt = build_prompt("", &fixed_tag());
        for heading in [
            "1) Basic information",
            "2) Experience summary",
            "3) Technical profile",
            "4) Technology classification",
            "5) Project & experience analysis",
            "6) Education",
            "7) Additional information",
        ] {
            assert!(prompt.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_empty_text_still_renders() {
        let prompt = build_prompt("", &fixed_tag());
        assert!(prompt.trim_end().ends_with("CV_PROCESSING_ID:deadbeef_TIME:1712345678"));
    }

    #[test]
    fn test_braces_in_resume_text_are_not_reinterpreted() {
        let prompt = build_prompt("skills: {cv_text} {rust}", &fixed_tag());
        assert!(prompt.contains("skills: {cv_text} {rust}"));
    }
}
