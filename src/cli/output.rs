//! Output rendering for fix results
//!
//! Supports console (pretty), JSON, and quiet output modes.

use crate::engine::{FixReport, unified_diff};
use serde::Serialize;
use std::fmt::Write as _;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Output mode for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Console,
    Json,
    Quiet,
}

impl OutputMode {
    /// Parse from string
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "quiet" => Self::Quiet,
            _ => Self::Console,
        }
    }
}

/// Human-readable summary of a fix run
pub fn render_summary(report: &FixReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "File: {}", report.file_path);
    let _ = writeln!(out, "Fixes applied: {}", report.total_fixes);
    let _ = writeln!(out, "Fixes skipped: {}", report.skipped_fixes.len());

    if !report.applied_fixes.is_empty() {
        let _ = writeln!(out, "\nApplied fixes:");
        for fix in &report.applied_fixes {
            let _ = writeln!(
                out,
                "  - {}: [{}] {}",
                fix.line_range, fix.severity, fix.explanation
            );
        }
    }

    if !report.skipped_fixes.is_empty() {
        let _ = writeln!(out, "\nSkipped fixes:");
        for fix in &report.skipped_fixes {
            let _ = writeln!(out, "  - {}: {}", fix.line_range, fix.reason);
        }
    }

    out
}

/// Unified diff of the changes, optionally with ANSI color
pub fn render_diff(original: &str, fixed: &str, file_name: &str, use_color: bool) -> String {
    if original == fixed {
        return "No changes made.\n".to_string();
    }

    let diff = unified_diff(original, fixed, file_name);
    if !use_color {
        return diff;
    }

    let mut out = String::new();
    for line in diff.split_inclusive('\n') {
        if line.starts_with('+') && !line.starts_with("+++") {
            let _ = write!(out, "{}{}{}", GREEN, line, RESET);
        } else if line.starts_with('-') && !line.starts_with("---") {
            let _ = write!(out, "{}{}{}", RED, line, RESET);
        } else if line.starts_with("@@") {
            let _ = write!(out, "{}{}{}", CYAN, line, RESET);
        } else {
            out.push_str(line);
        }
    }

    out
}

/// Pretty-printed JSON for machine consumers
pub fn render_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
