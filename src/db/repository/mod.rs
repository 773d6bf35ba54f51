//! Repository layer — evidence ledger database operations.
//!
//! Thin functions over a borrowed connection; each sub-module owns one table.

mod evidence_file;
mod evidence_link;

pub use evidence_file::*;
pub use evidence_link::*;
