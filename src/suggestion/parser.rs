//! Suggestion ingestion from review backend output
//!
//! Backends return suggestion records as JSON, but the JSON is often wrapped
//! in prose or a markdown code fence. Supported shapes:
//! - `{"suggestions": [...]}` envelope
//! - bare array of records
//! - either of the above inside a ```json fence

use super::types::{Category, Severity, Suggestion};
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Errors during suggestion parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no suggestions found in input")]
    NoSuggestionsFound,

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw record as produced by the backend, before defaults are applied
#[derive(Debug, Deserialize)]
struct SuggestionRecord {
    #[serde(default = "default_start_line")]
    start_line: usize,
    end_line: Option<usize>,
    #[serde(default)]
    original_code: String,
    #[serde(default)]
    suggested_code: String,
    #[serde(default)]
    explanation: String,
    #[serde(default = "default_severity")]
    severity: Severity,
    #[serde(default = "default_category")]
    category: Category,
}

#[derive(Debug, Deserialize)]
struct SuggestionsEnvelope {
    suggestions: Vec<SuggestionRecord>,
}

fn default_start_line() -> usize {
    1
}

fn default_severity() -> Severity {
    Severity::Medium
}

fn default_category() -> Category {
    Category::Style
}

impl SuggestionRecord {
    /// Apply defaults and validate the line-range invariant.
    /// Returns `None` for records that violate `1 <= start_line <= end_line`.
    fn into_suggestion(self) -> Option<Suggestion> {
        let end_line = self.end_line.unwrap_or(self.start_line);
        if self.start_line == 0 || end_line < self.start_line {
            warn!(
                start_line = self.start_line,
                end_line, "dropping suggestion with invalid line range"
            );
            return None;
        }
        Some(Suggestion {
            start_line: self.start_line,
            end_line,
            original_code: self.original_code,
            suggested_code: self.suggested_code,
            explanation: self.explanation,
            severity: self.severity,
            category: self.category,
        })
    }
}

/// Parse suggestions from backend output, auto-detecting format
pub fn parse_suggestions(input: &str) -> Result<Vec<Suggestion>, ParseError> {
    let trimmed = input.trim();

    // Input that already looks like JSON is parsed strictly so malformed
    // records surface a real error instead of "no suggestions found"
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return parse_json_records(trimmed);
    }

    if let Some(block) = extract_json_block(input) {
        return parse_json_records(&block);
    }

    Err(ParseError::NoSuggestionsFound)
}

/// Parse a JSON envelope or bare array of records
fn parse_json_records(input: &str) -> Result<Vec<Suggestion>, ParseError> {
    let records = if input.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<SuggestionRecord>>(input)?
    } else {
        serde_json::from_str::<SuggestionsEnvelope>(input)?.suggestions
    };

    Ok(records
        .into_iter()
        .filter_map(SuggestionRecord::into_suggestion)
        .collect())
}

/// Extract the first JSON-looking fenced code block
fn extract_json_block(input: &str) -> Option<String> {
    let fence_re = Regex::new(r"```(?:json)?\s*\n([\s\S]*?)\n```").expect("static regex");

    for caps in fence_re.captures_iter(input) {
        let content = caps[1].trim();
        if content.starts_with('{') || content.starts_with('[') {
            return Some(content.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_envelope() {
        let json = r#"
{
    "suggestions": [
        {
            "start_line": 3,
            "end_line": 4,
            "original_code": "pass",
            "suggested_code": "return None",
            "explanation": "explicit return",
            "severity": "high",
            "category": "bug"
        }
    ]
}
"#;

        let suggestions = parse_suggestions(json).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].start_line, 3);
        assert_eq!(suggestions[0].end_line, 4);
        assert_eq!(suggestions[0].severity, Severity::High);
        assert_eq!(suggestions[0].category, Category::Bug);
    }

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[{"start_line": 1, "suggested_code": "x = 1"}]"#;

        let suggestions = parse_suggestions(json).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggested_code, "x = 1");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let json = r#"[{"suggested_code": "fixed"}]"#;

        let suggestions = parse_suggestions(json).unwrap();
        let s = &suggestions[0];
        assert_eq!(s.start_line, 1);
        assert_eq!(s.end_line, 1);
        assert_eq!(s.severity, Severity::Medium);
        assert_eq!(s.category, Category::Style);
        assert!(s.original_code.is_empty());
        assert!(s.explanation.is_empty());
    }

    #[test]
    fn test_end_line_defaults_to_start_line() {
        let json = r#"[{"start_line": 7, "suggested_code": "y"}]"#;

        let suggestions = parse_suggestions(json).unwrap();
        assert_eq!(suggestions[0].start_line, 7);
        assert_eq!(suggestions[0].end_line, 7);
    }

    #[test]
    fn test_parse_markdown_fence() {
        let output = r#"
Here are my review findings:

```json
{"suggestions": [{"start_line": 2, "suggested_code": "let x = 1;"}]}
```

Let me know if you need anything else.
"#;

        let suggestions = parse_suggestions(output).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].start_line, 2);
    }

    #[test]
    fn test_invalid_range_dropped() {
        let json = r#"[
            {"start_line": 5, "end_line": 3, "suggested_code": "a"},
            {"start_line": 0, "suggested_code": "b"},
            {"start_line": 1, "suggested_code": "c"}
        ]"#;

        let suggestions = parse_suggestions(json).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].suggested_code, "c");
    }

    #[test]
    fn test_no_suggestions_found() {
        let result = parse_suggestions("just prose, no structured data");
        assert!(matches!(result, Err(ParseError::NoSuggestionsFound)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = parse_suggestions(r#"{"suggestions": [{"start_line": }]}"#);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn test_unknown_severity_is_an_error() {
        let result = parse_suggestions(r#"[{"severity": "catastrophic"}]"#);
        assert!(matches!(result, Err(ParseError::Json(_))));
    }
}
