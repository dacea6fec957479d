mod cli;
mod config;
mod engine;
mod fixer;
mod logging;
mod suggestion;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli::commands::{ApplyRequest, run_apply, run_validate};
use cli::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "revfix")]
#[command(about = "Apply structured code review suggestions to source files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project directory (defaults to current)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    /// Suppress normal output
    #[arg(long, global = true)]
    quiet: bool,

    /// Write logs to a file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply suggestions to a file
    Apply {
        /// File to fix
        file: PathBuf,

        /// Suggestions JSON produced by the review backend
        #[arg(long)]
        suggestions: PathBuf,

        /// Write changes back to the file
        #[arg(long)]
        write: bool,

        /// Skip the .bak backup when writing
        #[arg(long)]
        no_backup: bool,

        /// Minimum severity to apply (critical, high, medium, low)
        #[arg(long)]
        min_severity: Option<String>,

        /// Category to apply (repeatable; all categories when omitted)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Output mode: console, json, or quiet
        #[arg(long, default_value = "console")]
        output: String,

        /// Print a unified diff of the changes
        #[arg(long)]
        diff: bool,
    },

    /// Validate a suggestions file without touching any source file
    Validate {
        /// Suggestions JSON to check
        suggestions: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.debug, cli.quiet, cli.log_file.clone())?;

    let project_dir = cli.dir.as_deref();
    let config = config::RevfixConfig::load(project_dir)?;

    let exit_code = match cli.command {
        Commands::Apply {
            file,
            suggestions,
            write,
            no_backup,
            min_severity,
            categories,
            output,
            diff,
        } => {
            let mode = if cli.quiet {
                OutputMode::Quiet
            } else {
                OutputMode::from_str(
                    config
                        .fix
                        .output
                        .as_deref()
                        .filter(|_| output == "console")
                        .unwrap_or(&output),
                )
            };

            let request = ApplyRequest {
                file: &file,
                suggestions_path: &suggestions,
                write,
                no_backup,
                min_severity: min_severity.as_deref(),
                categories: &categories,
                mode,
                show_diff: diff,
            };
            run_apply(&request, &config)?
        }

        Commands::Validate { suggestions } => run_validate(&suggestions)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
