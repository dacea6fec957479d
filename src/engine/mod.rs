//! The fix engine: policy filtering, conflict resolution, patch application,
//! and result aggregation
//!
//! [`apply`] is a pure function of the document text, the suggestion list, and
//! the policy: no I/O, no state across invocations, deterministic output.
//! Concurrent invocations on different documents need no coordination.

mod applier;
mod document;
mod policy;
mod report;

pub use applier::{ApplyOutcome, apply};
pub use policy::FixPolicy;
pub use report::{FixReport, unified_diff};
