//! File-level fix boundary: read, apply, back up, write
//!
//! The engine itself never touches the filesystem; everything here is caller
//! policy. Write-back is opt-in and creates a `.bak` copy of the original
//! unless backups are disabled.

use crate::engine::{ApplyOutcome, FixPolicy, apply};
use crate::suggestion::Suggestion;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// How many leading bytes to scan for binary content
const BINARY_CHECK_SIZE: usize = 8192;

/// Errors while fixing a file
#[derive(Debug, Error)]
pub enum FixError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot fix binary file: {path}")]
    BinaryFile { path: PathBuf },

    #[error("file is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },

    #[error("failed to write file {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },

    #[error("failed to create backup {path}: {source}")]
    BackupError { path: PathBuf, source: io::Error },
}

/// Write-back behavior for [`fix_file`]
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions {
    /// Write the fixed text back to the file
    pub write: bool,
    /// Copy the original to `<file>.bak` before overwriting
    pub backup: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            write: false,
            backup: true,
        }
    }
}

/// Outcome of fixing a single file
#[derive(Debug)]
pub struct FileFixOutcome {
    pub path: PathBuf,
    pub original: String,
    pub outcome: ApplyOutcome,
    /// Backup location, when one was created
    pub backup_path: Option<PathBuf>,
    /// Whether the fixed text was written back
    pub written: bool,
}

/// Run the engine over one file and optionally write the result back.
///
/// Missing, binary, or non-UTF-8 files are hard failures: there is nothing to
/// patch. Per-suggestion problems never surface here; they end up in the
/// outcome's skipped list.
pub fn fix_file(
    path: &Path,
    suggestions: &[Suggestion],
    policy: &FixPolicy,
    options: WriteOptions,
) -> Result<FileFixOutcome, FixError> {
    if !path.exists() {
        return Err(FixError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|e| FixError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    if is_binary(&bytes) {
        return Err(FixError::BinaryFile {
            path: path.to_path_buf(),
        });
    }

    let original = String::from_utf8(bytes).map_err(|_| FixError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    let outcome = apply(&original, suggestions, policy);
    let has_changes = outcome.final_text != original;
    debug!(
        path = %path.display(),
        applied = outcome.applied.len(),
        skipped = outcome.skipped.len(),
        "applied suggestions"
    );

    let mut backup_path = None;
    let mut written = false;

    if options.write && has_changes {
        if options.backup {
            let backup = backup_path_for(path);
            fs::write(&backup, &original).map_err(|e| FixError::BackupError {
                path: backup.clone(),
                source: e,
            })?;
            backup_path = Some(backup);
        }

        fs::write(path, &outcome.final_text).map_err(|e| FixError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
        written = true;
        info!(
            path = %path.display(),
            fixes = outcome.applied.len(),
            "wrote fixed file"
        );
    }

    Ok(FileFixOutcome {
        path: path.to_path_buf(),
        original,
        outcome,
        backup_path,
        written,
    })
}

/// Binary sniff: a NUL byte in the leading chunk
fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_CHECK_SIZE).any(|b| *b == 0)
}

/// `src/main.rs` becomes `src/main.rs.bak`
fn backup_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}
