//! Extraction pipeline: chunking, recognition passes, and event fusion.

pub mod chunker;
pub mod dates;
pub mod entities;
pub mod ingest;
pub mod offsets;
pub mod orchestrator;
pub mod patterns;
pub mod synthesize;

pub use chunker::{Chunker, FixedWindowChunker, TextChunk};
pub use ingest::{describe_stored, describe_upload};
pub use orchestrator::extract_document;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}
