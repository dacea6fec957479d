//! Policy filter deciding which suggestions are eligible to apply

use crate::suggestion::{Category, Severity, Suggestion};

/// Filter policy for suggestions
///
/// Stateless: evaluation never consults document content and never mutates
/// the suggestion.
#[derive(Debug, Clone)]
pub struct FixPolicy {
    /// Minimum severity to apply
    pub min_severity: Severity,
    /// Categories to apply; `None` applies all categories
    pub categories: Option<Vec<Category>>,
    /// Reject suggestions whose replacement is empty or whitespace-only
    pub require_replacement: bool,
}

impl Default for FixPolicy {
    fn default() -> Self {
        Self {
            min_severity: Severity::Low,
            categories: None,
            require_replacement: true,
        }
    }
}

impl FixPolicy {
    /// Evaluate a suggestion against the policy.
    ///
    /// Returns `Err(reason)` when the suggestion must not be applied. Checks
    /// run in priority order: severity floor, category allow-list, then
    /// empty-replacement.
    pub fn evaluate(&self, suggestion: &Suggestion) -> Result<(), String> {
        if suggestion.severity.weight() < self.min_severity.weight() {
            return Err(format!(
                "severity {} below threshold {}",
                suggestion.severity, self.min_severity
            ));
        }

        if let Some(ref categories) = self.categories {
            if !categories.contains(&suggestion.category) {
                return Err(format!(
                    "category {} not in filter list",
                    suggestion.category
                ));
            }
        }

        if self.require_replacement && suggestion.suggested_code.trim().is_empty() {
            return Err("no suggested code provided".to_string());
        }

        Ok(())
    }
}
