//! JSON recovery — turns a free-form model reply into a JSON object.
//!
//! Order of attempts, first match wins:
//! 1. a ```` ```json ```` fenced block,
//! 2. the span from the first `{` to the last `}`,
//! 3. the whole reply verbatim.
//!
//! The chosen candidate is then repaired (trailing commas, `//` and `/* */`
//! comments) and parsed. If parsing fails, `}` + whitespace + `}` is collapsed
//! to a single `}` and parsing is retried once.
//!
//! The repairs are textual and order-sensitive. They will mangle string values
//! that themselves contain `//`, `/* */` or `, ]`-like sequences (URLs, for
//! instance). That risk is accepted; do not try to make this a JSON parser.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

static FENCED_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*\n(.*?)\n```").expect("valid regex"));
static TRAILING_COMMA_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\]").expect("valid regex"));
static TRAILING_COMMA_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\}").expect("valid regex"));
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//.*?\n").expect("valid regex"));
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));
static DOUBLED_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}\s*\}").expect("valid regex"));

/// Where the JSON candidate was found in the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    Fenced,
    Braces,
    Verbatim,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CandidateSource::Fenced => "fenced",
            CandidateSource::Braces => "braces",
            CandidateSource::Verbatim => "verbatim",
        };
        f.write_str(name)
    }
}

/// Outcome of recovery. `Parsed` with an empty map means the model returned
/// `{}`; `Unrecoverable` means no JSON object could be found at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Recovery {
    Parsed(Map<String, Value>),
    Unrecoverable { original: String },
}

/// Recovers a JSON object from `reply`. Never panics and never fails:
/// every path ends in `Parsed` or `Unrecoverable`.
pub fn recover_json(reply: &str) -> Recovery {
    let (candidate, source) = locate_candidate(reply);
    let repaired = repair(candidate);

    match parse_object(&repaired) {
        Ok(map) => {
            debug!(source = %source, "Recovered JSON object from model reply");
            return Recovery::Parsed(map);
        }
        Err(e) => {
            warn!(source = %source, "JSON parsing error: {e}");
            debug!("Raw content: {repaired}");
        }
    }

    let collapsed = DOUBLED_CLOSE.replace_all(&repaired, "}");
    match parse_object(&collapsed) {
        Ok(map) => {
            debug!(source = %source, "Recovered JSON object after collapsing '}}}}'");
            Recovery::Parsed(map)
        }
        Err(e) => {
            warn!("Retry after collapsing '}}}}' failed: {e}");
            Recovery::Unrecoverable {
                original: reply.to_string(),
            }
        }
    }
}

/// Picks the JSON candidate out of the reply without modifying it.
pub fn locate_candidate(reply: &str) -> (&str, CandidateSource) {
    if let Some(inner) = FENCED_JSON.captures(reply).and_then(|c| c.get(1)) {
        return (inner.as_str(), CandidateSource::Fenced);
    }

    match reply.find('{') {
        Some(start) => {
            let span = match reply.rfind('}') {
                Some(end) if end >= start => &reply[start..=end],
                _ => "",
            };
            (span, CandidateSource::Braces)
        }
        None => (reply, CandidateSource::Verbatim),
    }
}

/// Applies the four textual repairs, in order, to a copy of `candidate`.
pub fn repair(candidate: &str) -> String {
    let text = TRAILING_COMMA_ARRAY.replace_all(candidate, "]");
    let text = TRAILING_COMMA_OBJECT.replace_all(&text, "}");
    let text = LINE_COMMENT.replace_all(&text, "");
    let text = BLOCK_COMMENT.replace_all(&text, "");
    text.into_owned()
}

#[derive(Debug)]
enum ParseFailure {
    Json(serde_json::Error),
    NotAnObject(&'static str),
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseFailure::Json(e) => write!(f, "{e}"),
            ParseFailure::NotAnObject(kind) => write!(f, "expected a JSON object, found {kind}"),
        }
    }
}

fn parse_object(candidate: &str) -> Result<Map<String, Value>, ParseFailure> {
    match serde_json::from_str::<Value>(candidate).map_err(ParseFailure::Json)? {
        Value::Object(map) => Ok(map),
        Value::Array(_) => Err(ParseFailure::NotAnObject("an array")),
        Value::String(_) => Err(ParseFailure::NotAnObject("a string")),
        Value::Number(_) => Err(ParseFailure::NotAnObject("a number")),
        Value::Bool(_) => Err(ParseFailure::NotAnObject("a boolean")),
        Value::Null => Err(ParseFailure::NotAnObject("null")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn is_parsed(recovery: &Recovery) -> bool {
        matches!(recovery, Recovery::Parsed(_))
    }

    fn parsed(reply: &str) -> Value {
        match recover_json(reply) {
            Recovery::Parsed(map) => Value::Object(map),
            other => panic!("expected Parsed, got {other:?}"),
        }
    }

    #[test]
    fn test_fenced_block_with_trailing_comma() {
        let reply = "Here is the data:\n```json\n{\"full_name\": \"Jane Doe\", \"email\": \"jane@x.com\",}\n```";
        assert_eq!(
            parsed(reply),
            json!({"full_name": "Jane Doe", "email": "jane@x.com"})
        );
    }

    #[test]
    fn test_fenced_block_ignores_surrounding_prose_with_braces() {
        let reply = "Note {not json}.\n```json\n{\"a\": [1, 2]}\n```\nThanks {bye}";
        assert_eq!(parsed(reply), json!({"a": [1, 2]}));
    }

    #[test]
    fn test_first_fenced_block_wins() {
        let reply = "```json\n{\"first\": true}\n```\n```json\n{\"second\": true}\n```";
        assert_eq!(parsed(reply), json!({"first": true}));
    }

    #[test]
    fn test_brace_span_without_fence() {
        let reply = "Sure! {\"name\": \"Ana\", \"skills\": [\"Rust\", \"SQL\"]} Let me know.";
        assert_eq!(parsed(reply), json!({"name": "Ana", "skills": ["Rust", "SQL"]}));
    }

    #[test]
    fn test_trailing_comma_before_bracket() {
        let reply = "{\"skills\": [\"Rust\", \"Go\", ]}";
        assert_eq!(parsed(reply), json!({"skills": ["Rust", "Go"]}));
    }

    #[test]
    fn test_trailing_comma_before_brace_across_newline() {
        let reply = "{\n  \"a\": 1,\n}";
        assert_eq!(parsed(reply), json!({"a": 1}));
    }

    #[test]
    fn test_line_comment_is_stripped() {
        let reply = "{\n  \"a\": 1 // the answer\n}";
        assert_eq!(parsed(reply), json!({"a": 1}));
    }

    #[test]
    fn test_block_comment_across_lines_is_stripped() {
        let reply = "{\"a\": /* first\nsecond */ 1}";
        assert_eq!(parsed(reply), json!({"a": 1}));
    }

    #[test]
    fn test_doubled_closing_brace_is_collapsed_on_retry() {
        let reply = "{\"a\": {\"b\": 1}}\n}";
        assert_eq!(parsed(reply), json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_prose_only_is_unrecoverable() {
        let reply = "Sorry, I cannot process this.";
        assert_eq!(
            recover_json(reply),
            Recovery::Unrecoverable {
                original: reply.to_string()
            }
        );
    }

    #[test]
    fn test_empty_reply_is_unrecoverable() {
        assert!(!is_parsed(&recover_json("")));
    }

    #[test]
    fn test_open_brace_without_close_is_unrecoverable() {
        assert!(!is_parsed(&recover_json("{\"a\": 1")));
    }

    #[test]
    fn test_two_objects_with_comment_between_is_unrecoverable() {
        let reply = "{\"a\": 1} // note\n{\"a\": 1}";
        assert_eq!(
            recover_json(reply),
            Recovery::Unrecoverable {
                original: reply.to_string()
            }
        );
    }

    #[test]
    fn test_top_level_array_is_unrecoverable() {
        assert!(!is_parsed(&recover_json("```json\n[1, 2, 3]\n```")));
    }

    #[test]
    fn test_empty_object_is_parsed_not_unrecoverable() {
        assert_eq!(recover_json("{}"), Recovery::Parsed(Map::new()));
    }

    #[test]
    fn test_non_ascii_values_survive() {
        assert_eq!(
            parsed("{\"full_name\": \"Walá Oueslati\"}"),
            json!({"full_name": "Walá Oueslati"})
        );
    }

    #[test]
    fn test_locate_candidate_sources() {
        assert_eq!(
            locate_candidate("```json\n{}\n```").1,
            CandidateSource::Fenced
        );
        assert_eq!(locate_candidate("x {} y"), ("{}", CandidateSource::Braces));
        assert_eq!(locate_candidate("no json"), ("no json", CandidateSource::Verbatim));
        assert_eq!(locate_candidate("} then {"), ("", CandidateSource::Braces));
    }

    #[test]
    fn test_repair_does_not_touch_original() {
        let original = String::from("{\"a\": [1,],}");
        let repaired = repair(&original);
        assert_eq!(repaired, "{\"a\": [1]}");
        assert_eq!(original, "{\"a\": [1,],}");
    }

    #[test]
    fn test_url_in_string_value_is_mangled_by_line_comment_repair() {
        // Known limitation: "//" inside a string value starts a comment.
        let reply = "{\"site\": \"https://x.dev\",\n\"a\": 1}";
        assert!(!is_parsed(&recover_json(reply)));
    }
}
