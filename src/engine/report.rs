//! Post-processing of apply outcomes into structured reports and diffs

use super::applier::ApplyOutcome;
use crate::suggestion::{Category, Severity};
use serde::Serialize;
use similar::TextDiff;

/// A fix that was applied, as reported to the user
#[derive(Debug, Clone, Serialize)]
pub struct AppliedFix {
    pub line_range: String,
    pub start_line: usize,
    pub end_line: usize,
    pub severity: Severity,
    pub category: Category,
    pub explanation: String,
}

/// A fix that was skipped, with the reason it was skipped
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFix {
    pub line_range: String,
    pub explanation: String,
    pub reason: String,
}

/// Structured report of one fix run over one document
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    pub file_path: String,
    pub total_fixes: usize,
    pub has_changes: bool,
    pub applied_fixes: Vec<AppliedFix>,
    pub skipped_fixes: Vec<SkippedFix>,
}

impl FixReport {
    /// Build a report from an outcome. Pure: reads the outcome, mutates
    /// nothing.
    pub fn new(file_path: &str, original: &str, outcome: &ApplyOutcome) -> Self {
        let applied_fixes = outcome
            .applied
            .iter()
            .map(|s| AppliedFix {
                line_range: s.line_range(),
                start_line: s.start_line,
                end_line: s.end_line,
                severity: s.severity,
                category: s.category,
                explanation: s.explanation.clone(),
            })
            .collect();

        let skipped_fixes = outcome
            .skipped
            .iter()
            .map(|(s, reason)| SkippedFix {
                line_range: s.line_range(),
                explanation: s.explanation.clone(),
                reason: reason.clone(),
            })
            .collect();

        Self {
            file_path: file_path.to_string(),
            total_fixes: outcome.applied.len(),
            has_changes: outcome.final_text != original,
            applied_fixes,
            skipped_fixes,
        }
    }
}

/// Line-based unified diff between the original and fixed text.
/// Empty when the texts are identical.
pub fn unified_diff(original: &str, fixed: &str, file_name: &str) -> String {
    if original == fixed {
        return String::new();
    }

    let diff = TextDiff::from_lines(original, fixed);
    diff.unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", file_name), &format!("b/{}", file_name))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FixPolicy, apply};
    use crate::suggestion::Suggestion;

    fn sugg(start: usize, end: usize, code: &str, severity: Severity) -> Suggestion {
        Suggestion {
            start_line: start,
            end_line: end,
            original_code: String::new(),
            suggested_code: code.to_string(),
            explanation: "explanation".to_string(),
            severity,
            category: Category::Bug,
        }
    }

    #[test]
    fn test_report_counts_and_flags() {
        let doc = "a\nb\n";
        let suggestions = vec![
            sugg(1, 1, "A", Severity::High),
            sugg(1, 1, "conflict", Severity::Low),
        ];
        let outcome = apply(doc, &suggestions, &FixPolicy::default());

        let report = FixReport::new("test.rs", doc, &outcome);

        assert_eq!(report.file_path, "test.rs");
        assert_eq!(report.total_fixes, 1);
        assert!(report.has_changes);
        assert_eq!(report.applied_fixes.len(), 1);
        assert_eq!(report.applied_fixes[0].line_range, "L1");
        assert_eq!(report.skipped_fixes.len(), 1);
        assert!(report.skipped_fixes[0].reason.contains("overlaps"));
    }

    #[test]
    fn test_report_no_changes() {
        let doc = "a\nb\n";
        let outcome = apply(doc, &[], &FixPolicy::default());
        let report = FixReport::new("test.rs", doc, &outcome);

        assert_eq!(report.total_fixes, 0);
        assert!(!report.has_changes);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let doc = "a\n";
        let outcome = apply(doc, &[sugg(1, 1, "A", Severity::High)], &FixPolicy::default());
        let report = FixReport::new("test.rs", doc, &outcome);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total_fixes\":1"));
        assert!(json.contains("\"severity\":\"high\""));
        assert!(json.contains("\"category\":\"bug\""));
    }

    #[test]
    fn test_unified_diff_marks_changes() {
        let diff = unified_diff("a\nb\nc\n", "a\nB\nc\n", "file.py");

        assert!(diff.contains("a/file.py"));
        assert!(diff.contains("b/file.py"));
        assert!(diff.contains("-b"));
        assert!(diff.contains("+B"));
        assert!(diff.contains("@@"));
    }

    #[test]
    fn test_unified_diff_empty_for_identical_text() {
        assert_eq!(unified_diff("a\nb\n", "a\nb\n", "x"), "");
    }
}
