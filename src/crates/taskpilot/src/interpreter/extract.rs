//! JSON extraction from free-form model output.
//!
//! The model's text is unreliable: the JSON object we asked for may be
//! wrapped in prose or a markdown code fence. Extraction is lenient (two
//! tiers), but parsing the extracted span stays strict — that happens in
//! [`super::llm`] with a real JSON parser.

use regex::Regex;
use std::sync::LazyLock;

static FENCED_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)```json\s*(.*?)\s*```").unwrap());

static BARE_OBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

/// Extract the JSON object span from a model response.
///
/// Tries, in order: the first fenced block labeled `json` (any case), then
/// the first top-level `{...}` span (first `{` to last `}`). Returns
/// `None` when neither pattern matches.
pub fn extract_json(text: &str) -> Option<&str> {
    if let Some(caps) = FENCED_JSON.captures(text) {
        return caps.get(1).map(|m| m.as_str());
    }
    BARE_OBJECT.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_fenced_block() {
        let response = "Here is the result:\n```json\n{\"action\": \"LIST\"}\n```\nDone.";
        assert_eq!(extract_json(response), Some("{\"action\": \"LIST\"}"));
    }

    #[test]
    fn test_extract_fenced_block_uppercase_label() {
        let response = "```JSON\n{\"action\": \"ADD\"}\n```";
        assert_eq!(extract_json(response), Some("{\"action\": \"ADD\"}"));
    }

    #[test]
    fn test_extract_bare_object_with_surrounding_prose() {
        let response = "Sure! {\"action\": \"ADD\", \"tasks\": []} hope that helps";
        assert_eq!(
            extract_json(response),
            Some("{\"action\": \"ADD\", \"tasks\": []}")
        );
    }

    #[test]
    fn test_bare_object_spans_first_to_last_brace() {
        let response = "{\"a\": {\"nested\": 1}} trailing";
        assert_eq!(extract_json(response), Some("{\"a\": {\"nested\": 1}}"));
    }

    #[test]
    fn test_fence_preferred_over_bare_object() {
        let response = "intro {\"not\": \"this\"}\n```json\n{\"but\": \"this\"}\n```";
        // The fenced block wins even when a bare object appears earlier.
        assert_eq!(extract_json(response), Some("{\"but\": \"this\"}"));
    }

    #[test]
    fn test_no_json_at_all() {
        assert_eq!(extract_json("I don't understand that command"), None);
        assert_eq!(extract_json(""), None);
    }
}
