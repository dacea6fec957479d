//! Configuration loading with multi-layer merge
//!
//! Load order (later overrides earlier):
//! 1. Built-in defaults
//! 2. ~/.config/revfix/config.toml
//! 3. .revfix.toml (project)

use crate::engine::FixPolicy;
use crate::suggestion::{Category, Severity};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level revfix configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RevfixConfig {
    /// Fix defaults, overridable per-invocation by CLI flags
    #[serde(default)]
    pub fix: FixDefaults,
}

/// Default fix settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FixDefaults {
    /// Minimum severity to apply
    #[serde(default = "default_min_severity")]
    pub min_severity: Severity,

    /// Categories to apply; all categories when unset
    pub categories: Option<Vec<Category>>,

    /// Create a .bak copy before overwriting
    #[serde(default = "default_backup")]
    pub backup: bool,

    /// Default output mode for the CLI (console, json, quiet)
    pub output: Option<String>,
}

fn default_min_severity() -> Severity {
    Severity::Low
}

fn default_backup() -> bool {
    true
}

impl Default for FixDefaults {
    fn default() -> Self {
        Self {
            min_severity: default_min_severity(),
            categories: None,
            backup: default_backup(),
            output: None,
        }
    }
}

impl RevfixConfig {
    /// Load configuration from the standard hierarchy
    pub fn load(project_dir: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                let user_config = Self::load_file(&user_config_path)
                    .with_context(|| format!("loading {}", user_config_path.display()))?;
                config.merge(user_config);
            }
        }

        let project_config_path = project_dir
            .map(|p| p.join(".revfix.toml"))
            .unwrap_or_else(|| PathBuf::from(".revfix.toml"));

        if project_config_path.exists() {
            let project_config = Self::load_file(&project_config_path)
                .with_context(|| format!("loading {}", project_config_path.display()))?;
            config.merge(project_config);
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self =
            toml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Get the user config path (~/.config/revfix/config.toml)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("revfix/config.toml"))
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Self) {
        if other.fix.min_severity != default_min_severity() {
            self.fix.min_severity = other.fix.min_severity;
        }
        if other.fix.categories.is_some() {
            self.fix.categories = other.fix.categories;
        }
        if other.fix.backup != default_backup() {
            self.fix.backup = other.fix.backup;
        }
        if other.fix.output.is_some() {
            self.fix.output = other.fix.output;
        }
    }

    /// Build the engine policy from the configured defaults
    pub fn to_policy(&self) -> FixPolicy {
        FixPolicy {
            min_severity: self.fix.min_severity,
            categories: self.fix.categories.clone(),
            require_replacement: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RevfixConfig::default();
        assert_eq!(config.fix.min_severity, Severity::Low);
        assert!(config.fix.categories.is_none());
        assert!(config.fix.backup);
    }

    #[test]
    fn test_parse_toml() {
        let config: RevfixConfig = toml::from_str(
            r#"
[fix]
min_severity = "high"
categories = ["bug", "security"]
backup = false
"#,
        )
        .unwrap();

        assert_eq!(config.fix.min_severity, Severity::High);
        assert_eq!(
            config.fix.categories,
            Some(vec![Category::Bug, Category::Security])
        );
        assert!(!config.fix.backup);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result = toml::from_str::<RevfixConfig>("[fix]\nfrobnicate = true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_other_takes_precedence() {
        let mut base = RevfixConfig::default();
        let other: RevfixConfig = toml::from_str(
            r#"
[fix]
min_severity = "critical"
backup = false
output = "json"
"#,
        )
        .unwrap();

        base.merge(other);

        assert_eq!(base.fix.min_severity, Severity::Critical);
        assert!(!base.fix.backup);
        assert_eq!(base.fix.output.as_deref(), Some("json"));
    }

    #[test]
    fn test_merge_keeps_base_when_other_is_default() {
        let mut base: RevfixConfig = toml::from_str("[fix]\nmin_severity = \"high\"\n").unwrap();
        base.merge(RevfixConfig::default());
        assert_eq!(base.fix.min_severity, Severity::High);
    }

    #[test]
    fn test_to_policy() {
        let config: RevfixConfig =
            toml::from_str("[fix]\nmin_severity = \"medium\"\ncategories = [\"bug\"]\n").unwrap();
        let policy = config.to_policy();

        assert_eq!(policy.min_severity, Severity::Medium);
        assert_eq!(policy.categories, Some(vec![Category::Bug]));
        assert!(policy.require_replacement);
    }
}
