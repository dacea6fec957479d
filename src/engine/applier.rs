//! Conflict resolution and patch application
//!
//! Folds independently generated, possibly overlapping, line-range-scoped
//! edits into a single corrected document. Candidates are processed in
//! severity order, not document order; overlap with an already-applied fix is
//! treated conservatively as a conflict rather than merged.

use super::document::{Document, split_keepends};
use super::policy::FixPolicy;
use crate::suggestion::Suggestion;
use std::cmp::Reverse;
use std::collections::HashSet;
use thiserror::Error;

/// Complete result of one apply run: the edited text plus a full audit trail
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyOutcome {
    /// Suggestions applied, in the order they were actually applied
    pub applied: Vec<Suggestion>,
    /// Suggestions skipped, each with the reason it was skipped
    pub skipped: Vec<(Suggestion, String)>,
    /// The edited document text
    pub final_text: String,
}

#[derive(Debug, Error)]
enum SpliceError {
    #[error("replacement range {start}..{end} exceeds buffer length {len}")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Apply a batch of suggestions to a document.
///
/// Pure function: no I/O, no shared state, deterministic for a given input.
/// One bad suggestion never aborts the batch; it is skipped with a reason.
pub fn apply(text: &str, suggestions: &[Suggestion], policy: &FixPolicy) -> ApplyOutcome {
    let document = Document::parse(text);
    let mut buffer: Vec<String> = document.lines().to_vec();

    // Highest severity first, then earliest in the document; the sort is
    // stable, so exact ties keep their input order
    let mut ordered: Vec<&Suggestion> = suggestions.iter().collect();
    ordered.sort_by_key(|s| (Reverse(s.severity.weight()), s.start_line));

    let mut applied: Vec<Suggestion> = Vec::new();
    let mut skipped: Vec<(Suggestion, String)> = Vec::new();

    // Original line numbers already consumed by an applied fix. Kept in
    // original coordinates, never buffer indices, so overlap detection stays
    // correct as offset drifts.
    let mut claimed: HashSet<usize> = HashSet::new();

    // Cumulative net line-count change from applied edits only
    let mut offset: isize = 0;

    for suggestion in ordered {
        if let Err(reason) = policy.evaluate(suggestion) {
            skipped.push((suggestion.clone(), reason));
            continue;
        }

        // Iterate the claimed set, which is bounded by the document size; the
        // candidate's range is untrusted and may be arbitrarily large
        if claimed.iter().any(|line| suggestion.line_numbers().contains(line)) {
            skipped.push((
                suggestion.clone(),
                "overlaps with already-applied fix".to_string(),
            ));
            continue;
        }

        // Translate original line numbers into current buffer positions
        let buffer_start = suggestion.start_line as isize - 1 + offset;
        let buffer_end = suggestion.end_line as isize + offset;
        if buffer_start < 0 || buffer_end > buffer.len() as isize || buffer_end < buffer_start {
            skipped.push((suggestion.clone(), "line numbers out of range".to_string()));
            continue;
        }

        let start = buffer_start as usize;
        let end = buffer_end as usize;

        match splice(&mut buffer, start, end, &suggestion.suggested_code) {
            Ok(inserted) => {
                offset += inserted as isize - (end - start) as isize;
                claimed.extend(suggestion.line_numbers());
                applied.push(suggestion.clone());
            }
            Err(e) => {
                skipped.push((suggestion.clone(), format!("error applying fix: {}", e)));
            }
        }
    }

    let final_text = document.finish(buffer);

    ApplyOutcome {
        applied,
        skipped,
        final_text,
    }
}

/// Replace `buffer[start..end]` with the lines of `replacement`, preserving
/// line terminators. Returns the number of lines inserted.
fn splice(
    buffer: &mut Vec<String>,
    start: usize,
    end: usize,
    replacement: &str,
) -> Result<usize, SpliceError> {
    if end > buffer.len() || start > end {
        return Err(SpliceError::RangeOutOfBounds {
            start,
            end,
            len: buffer.len(),
        });
    }

    let mut lines = split_keepends(replacement);

    // A replacement that drops the terminator of the region's last line would
    // merge with the line that follows it in the buffer
    if let Some(last) = lines.last_mut() {
        if !last.ends_with('\n') && end > start && buffer[end - 1].ends_with('\n') {
            last.push('\n');
        }
    }

    let inserted = lines.len();
    buffer.splice(start..end, lines);
    Ok(inserted)
}
