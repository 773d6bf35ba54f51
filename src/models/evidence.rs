use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored source file in the evidence ledger.
///
/// Created once at upload and immutable afterwards; only retention cleanup
/// removes it. `file_hash` is the SHA-256 of the stored copy, so integrity
/// is always re-verifiable against the bytes on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceFile {
    pub id: i64,
    /// Original filename as uploaded. The on-disk copy gets a timestamp
    /// prefix, recorded in `stored_path`.
    pub filename: String,
    pub original_path: Option<String>,
    pub stored_path: String,
    pub file_hash: String,
    pub file_size: u64,
    pub mime_type: Option<String>,
    pub upload_time: NaiveDateTime,
    /// JSON blob of adapter metadata, opaque to the ledger.
    pub metadata: Option<String>,
}

/// A link from one timeline event to one stored file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceLink {
    pub id: i64,
    pub event_id: Uuid,
    pub file_id: i64,
    pub page_number: Option<i64>,
    pub text_snippet: Option<String>,
    pub confidence: f32,
    pub created_time: NaiveDateTime,
}

/// Joined view of a link plus its file, as handed to citation rendering
/// and evidence listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub filename: String,
    pub stored_path: String,
    pub file_hash: String,
    pub mime_type: Option<String>,
    pub page_number: Option<i64>,
    pub text_snippet: Option<String>,
    pub confidence: f32,
}
