//! Document description for the extraction pipeline.
//!
//! Text extraction itself (PDF parsing, OCR, email bodies) happens in
//! caller-supplied adapters; this module takes their output plus the raw
//! bytes and produces the metadata record that travels on every event.

use std::path::Path;

use chrono::Utc;
use sha2::{Digest, Sha256};

use super::ExtractionError;
use crate::models::enums::DocumentType;
use crate::models::{DocumentMetadata, EvidenceFile};

/// Describe a freshly uploaded document.
///
/// `text` is the adapter-extracted text; counts are in characters and
/// whitespace-delimited words. The hash covers the raw bytes, so the same
/// upload always produces the same fingerprint regardless of adapter.
pub fn describe_upload(
    filename: &str,
    bytes: &[u8],
    text: &str,
    stored_path: &str,
) -> Result<DocumentMetadata, ExtractionError> {
    let doc_type = doc_type_for(filename)?;

    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let sha256_hash = format!("{:x}", hasher.finalize());

    Ok(DocumentMetadata {
        filename: filename.to_string(),
        size: bytes.len() as u64,
        sha256_hash,
        upload_time: Utc::now().naive_utc(),
        stored_path: stored_path.to_string(),
        doc_type,
        text_length: text.chars().count(),
        word_count: text.split_whitespace().count(),
    })
}

/// Describe a document already sitting in the evidence ledger, reusing the
/// hash, size, and upload time recorded at store time.
pub fn describe_stored(
    file: &EvidenceFile,
    text: &str,
) -> Result<DocumentMetadata, ExtractionError> {
    let doc_type = doc_type_for(&file.filename)?;

    Ok(DocumentMetadata {
        filename: file.filename.clone(),
        size: file.file_size,
        sha256_hash: file.file_hash.clone(),
        upload_time: file.upload_time,
        stored_path: file.stored_path.clone(),
        doc_type,
        text_length: text.chars().count(),
        word_count: text.split_whitespace().count(),
    })
}

fn doc_type_for(filename: &str) -> Result<DocumentType, ExtractionError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match ext {
        Some(ext) => DocumentType::from_extension(&ext)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(format!(".{ext}"))),
        None => Err(ExtractionError::UnsupportedFormat(filename.to_string())),
    }
}
