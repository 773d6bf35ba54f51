//! Evidence ledger — chain of custody for source documents.
//!
//! Uploaded files are copied into a storage directory under a timestamped
//! name, fingerprinted, and tracked in SQLite; timeline events then link
//! to the stored files so every claim on the timeline can cite the
//! document it came from.

pub mod citation;
pub mod ledger;

pub use ledger::EvidenceLedger;

use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum EvidenceError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No evidence file named {0}")]
    FileNotFound(String),
}
