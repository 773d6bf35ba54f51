//! Timeline assembly — the case-wide view over per-document extractions.
//!
//! Extraction produces one event list per document; this module merges
//! them, applies display filters, orders everything chronologically, and
//! builds the summary header that exports carry. Deduplication happens
//! per document at extraction time, never across documents.

mod assemble;
mod order;
mod types;

pub use assemble::*;
pub use order::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────
