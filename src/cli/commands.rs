//! CLI command implementations

use super::output::{self, OutputMode};
use crate::config::RevfixConfig;
use crate::engine::FixReport;
use crate::fixer::{WriteOptions, fix_file};
use crate::suggestion::{Category, Severity, parse_suggestions};
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Arguments for the `apply` command
pub struct ApplyRequest<'a> {
    pub file: &'a Path,
    pub suggestions_path: &'a Path,
    pub write: bool,
    pub no_backup: bool,
    pub min_severity: Option<&'a str>,
    pub categories: &'a [String],
    pub mode: OutputMode,
    pub show_diff: bool,
}

/// Apply suggestions to a file
pub fn run_apply(request: &ApplyRequest, config: &RevfixConfig) -> Result<i32> {
    let raw = fs::read_to_string(request.suggestions_path)
        .with_context(|| format!("reading {}", request.suggestions_path.display()))?;
    let suggestions = parse_suggestions(&raw)
        .with_context(|| format!("parsing {}", request.suggestions_path.display()))?;
    debug!(count = suggestions.len(), "loaded suggestions");

    // Config supplies the defaults; CLI flags win
    let mut policy = config.to_policy();
    if let Some(s) = request.min_severity {
        policy.min_severity = s
            .parse::<Severity>()
            .map_err(|e| anyhow!("invalid --min-severity: {}", e))?;
    }
    if !request.categories.is_empty() {
        let categories = request
            .categories
            .iter()
            .map(|c| {
                c.parse::<Category>()
                    .map_err(|e| anyhow!("invalid --category: {}", e))
            })
            .collect::<Result<Vec<_>>>()?;
        policy.categories = Some(categories);
    }

    let options = WriteOptions {
        write: request.write,
        backup: !request.no_backup && config.fix.backup,
    };

    let result = fix_file(request.file, &suggestions, &policy, options)?;
    let report = FixReport::new(
        &result.path.display().to_string(),
        &result.original,
        &result.outcome,
    );

    match request.mode {
        OutputMode::Console => {
            if request.show_diff {
                let name = request
                    .file
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| request.file.display().to_string());
                print!(
                    "{}",
                    output::render_diff(&result.original, &result.outcome.final_text, &name, true)
                );
                println!();
            }
            print!("{}", output::render_summary(&report));
            if let Some(ref backup) = result.backup_path {
                println!("Backup written to {}", backup.display());
            }
            if report.has_changes && !result.written {
                println!("(preview only; pass --write to modify the file)");
            }
        }
        OutputMode::Json => {
            println!("{}", output::render_json(&report));
        }
        OutputMode::Quiet => {}
    }

    Ok(0)
}

/// Validate a suggestions file without touching any source file
pub fn run_validate(path: &Path) -> Result<i32> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    match parse_suggestions(&raw) {
        Ok(suggestions) => {
            println!(
                "✓ {} suggestions parsed from {}",
                suggestions.len(),
                path.display()
            );
            for s in &suggestions {
                println!(
                    "  {} [{}/{}] {}",
                    s.line_range(),
                    s.severity,
                    s.category,
                    s.explanation
                );
            }
            Ok(0)
        }
        Err(e) => {
            eprintln!("✗ failed to parse suggestions:\n{}", e);
            Ok(1)
        }
    }
}
