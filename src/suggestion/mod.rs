//! Suggestion records produced by the review backend
//!
//! A [`Suggestion`] is a proposed replacement for a contiguous line range of a
//! document, carrying severity/category metadata and a rationale. Records
//! arrive as structured JSON from the backend; [`parse_suggestions`] handles
//! the formats seen in practice, including markdown-fenced output.

mod parser;
mod types;

pub use parser::parse_suggestions;
pub use types::{Category, Severity, Suggestion};
