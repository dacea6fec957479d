//! Core suggestion types: severity, category, and the suggestion record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Numeric weight for sorting; higher is more severe.
    ///
    /// Sorting on the weight rather than the string form makes "descending
    /// severity" a total, unambiguous order.
    pub fn weight(self) -> u8 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

/// Issue category types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bug,
    Security,
    Performance,
    Style,
    Architecture,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Bug => "bug",
            Category::Security => "security",
            Category::Performance => "performance",
            Category::Style => "style",
            Category::Architecture => "architecture",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bug" => Ok(Category::Bug),
            "security" => Ok(Category::Security),
            "performance" => Ok(Category::Performance),
            "style" => Ok(Category::Style),
            "architecture" => Ok(Category::Architecture),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// A line-scoped replacement suggestion from the review backend
///
/// `start_line` and `end_line` are 1-based, inclusive, and refer to the
/// *original* document. Invariant: `1 <= start_line <= end_line`.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub start_line: usize,
    pub end_line: usize,
    pub original_code: String,
    pub suggested_code: String,
    pub explanation: String,
    pub severity: Severity,
    pub category: Category,
}

impl Suggestion {
    /// Human-readable line range, e.g. `L5` or `L5-8`
    pub fn line_range(&self) -> String {
        if self.start_line == self.end_line {
            format!("L{}", self.start_line)
        } else {
            format!("L{}-{}", self.start_line, self.end_line)
        }
    }

    /// Original document line numbers covered by this suggestion
    pub fn line_numbers(&self) -> RangeInclusive<usize> {
        self.start_line..=self.end_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_weight_ordering() {
        assert!(Severity::Critical.weight() > Severity::High.weight());
        assert!(Severity::High.weight() > Severity::Medium.weight());
        assert!(Severity::Medium.weight() > Severity::Low.weight());
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("critical".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!("HIGH".parse::<Severity>().unwrap(), Severity::High);
        assert!("bogus".parse::<Severity>().is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("bug".parse::<Category>().unwrap(), Category::Bug);
        assert_eq!("Security".parse::<Category>().unwrap(), Category::Security);
        assert!("other".parse::<Category>().is_err());
    }

    #[test]
    fn test_severity_serde_lowercase() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"high\"");
        let sev: Severity = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(sev, Severity::Low);
    }

    #[test]
    fn test_line_range_display() {
        let s = Suggestion {
            start_line: 5,
            end_line: 5,
            original_code: String::new(),
            suggested_code: String::new(),
            explanation: String::new(),
            severity: Severity::Medium,
            category: Category::Style,
        };
        assert_eq!(s.line_range(), "L5");

        let multi = Suggestion { end_line: 8, ..s };
        assert_eq!(multi.line_range(), "L5-8");
    }

    #[test]
    fn test_line_numbers_covers_range() {
        let s = Suggestion {
            start_line: 2,
            end_line: 4,
            original_code: String::new(),
            suggested_code: String::new(),
            explanation: String::new(),
            severity: Severity::Low,
            category: Category::Bug,
        };
        let lines: Vec<usize> = s.line_numbers().collect();
        assert_eq!(lines, vec![2, 3, 4]);
    }
}
