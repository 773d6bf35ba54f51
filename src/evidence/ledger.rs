//! Evidence storage and linking.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use rusqlite::Connection;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use uuid::Uuid;

use super::{citation, EvidenceError};
use crate::config;
use crate::db::open_database;
use crate::db::repository::{
    delete_files_older_than, get_file_by_filename, get_records_by_event, insert_file, insert_link,
    list_files_older_than, NewEvidenceFile, NewEvidenceLink,
};
use crate::models::{EvidenceFile, EvidenceLink, EvidenceRecord};

/// Custody ledger over a storage directory and its tracking database.
///
/// Stored files are immutable once written; integrity is checked against
/// the hash recorded at store time, never updated.
pub struct EvidenceLedger {
    storage_dir: PathBuf,
    conn: Connection,
}

impl EvidenceLedger {
    /// Open the ledger rooted at `storage_dir`, creating the directory and
    /// database on first use.
    pub fn open(storage_dir: &Path) -> Result<Self, EvidenceError> {
        std::fs::create_dir_all(storage_dir)?;
        let conn = open_database(&config::ledger_db_path(storage_dir))?;
        Ok(Self {
            storage_dir: storage_dir.to_path_buf(),
            conn,
        })
    }

    /// Store an uploaded file and record it in the ledger.
    ///
    /// The stored name is `YYYYMMDD_HHMMSS_<filename>` with spaces replaced
    /// by underscores. Bytes land in a temporary file first and are renamed
    /// into place, so a ledger row never points at a half-written file.
    pub fn store(
        &self,
        bytes: &[u8],
        filename: &str,
        mime_type: Option<&str>,
    ) -> Result<EvidenceFile, EvidenceError> {
        let upload_time = Utc::now().naive_utc();
        let stored_name = format!(
            "{}_{}",
            upload_time.format("%Y%m%d_%H%M%S"),
            filename.replace(' ', "_")
        );
        let stored_path = self.storage_dir.join(&stored_name);

        let mut tmp = NamedTempFile::new_in(&self.storage_dir)?;
        tmp.write_all(bytes)?;
        tmp.persist(&stored_path).map_err(|e| e.error)?;

        // Hash the stored copy, not the input buffer, so the fingerprint
        // covers exactly what sits on disk.
        let file_hash = hash_file(&stored_path)?;

        let mime = match mime_type {
            Some(m) => m.to_string(),
            None => mime_guess::from_path(filename)
                .first_raw()
                .unwrap_or("application/octet-stream")
                .to_string(),
        };

        let stored_path_str = stored_path.to_string_lossy().into_owned();
        let id = insert_file(
            &self.conn,
            &NewEvidenceFile {
                filename,
                original_path: None,
                stored_path: &stored_path_str,
                file_hash: &file_hash,
                file_size: bytes.len() as u64,
                mime_type: Some(&mime),
                upload_time,
                metadata: Some("{}"),
            },
        )?;

        tracing::info!(size = bytes.len(), "File stored successfully: {stored_name}");

        Ok(EvidenceFile {
            id,
            filename: filename.to_string(),
            original_path: None,
            stored_path: stored_path_str,
            file_hash,
            file_size: bytes.len() as u64,
            mime_type: Some(mime),
            upload_time,
            metadata: Some("{}".to_string()),
        })
    }

    /// Link a timeline event to a stored file.
    pub fn link(
        &self,
        event_id: &Uuid,
        filename: &str,
        page_number: Option<i64>,
        text_snippet: Option<&str>,
        confidence: f32,
    ) -> Result<EvidenceLink, EvidenceError> {
        let file = get_file_by_filename(&self.conn, filename)?
            .ok_or_else(|| EvidenceError::FileNotFound(filename.to_string()))?;

        let created_time = Utc::now().naive_utc();
        let id = insert_link(
            &self.conn,
            &NewEvidenceLink {
                event_id,
                file_id: file.id,
                page_number,
                text_snippet,
                confidence,
                created_time,
            },
        )?;

        Ok(EvidenceLink {
            id,
            event_id: *event_id,
            file_id: file.id,
            page_number,
            text_snippet: text_snippet.map(str::to_string),
            confidence,
            created_time,
        })
    }

    /// All evidence linked to an event, in link creation order.
    pub fn evidence_for(&self, event_id: &Uuid) -> Result<Vec<EvidenceRecord>, EvidenceError> {
        Ok(get_records_by_event(&self.conn, event_id)?)
    }

    /// Citation line for an event's linked evidence.
    pub fn citation_for(&self, event_id: &Uuid) -> Result<String, EvidenceError> {
        let records = self.evidence_for(event_id)?;
        Ok(citation::render(&records))
    }

    /// Check a stored file against the hash recorded at store time.
    ///
    /// `Ok(false)` covers every custody failure: unknown filename, missing
    /// stored file, or content drift. Only I/O and database trouble
    /// surface as errors.
    pub fn verify_integrity(&self, filename: &str) -> Result<bool, EvidenceError> {
        let Some(file) = get_file_by_filename(&self.conn, filename)? else {
            return Ok(false);
        };

        let path = Path::new(&file.stored_path);
        if !path.exists() {
            return Ok(false);
        }

        let current_hash = hash_file(path)?;
        Ok(current_hash == file.file_hash)
    }

    /// Remove files uploaded more than `days_old` days ago, on disk and in
    /// the ledger. Links to removed files cascade away. Returns the number
    /// of ledger rows removed.
    pub fn cleanup(&self, days_old: i64) -> Result<usize, EvidenceError> {
        let cutoff = Utc::now().naive_utc() - Duration::days(days_old);

        let old_files = list_files_older_than(&self.conn, cutoff)?;
        for file in &old_files {
            let path = Path::new(&file.stored_path);
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    tracing::warn!(path = %file.stored_path, error = %e, "Could not remove stored file");
                }
            }
        }

        let removed = delete_files_older_than(&self.conn, cutoff)?;
        tracing::info!("Cleaned up {removed} old evidence files");
        Ok(removed)
    }
}

/// SHA-256 of a file's content, streamed in 4 KiB reads.
fn hash_file(path: &Path) -> Result<String, std::io::Error> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 4096];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn test_ledger() -> (tempfile::TempDir, EvidenceLedger) {
        let dir = tempdir().expect("Failed to create temp dir");
        let ledger = EvidenceLedger::open(dir.path()).expect("Failed to open ledger");
        (dir, ledger)
    }

    /// Insert a ledger row with a backdated upload, with a real stored file
    /// when `on_disk` is set.
    fn insert_backdated(ledger: &EvidenceLedger, filename: &str, days_ago: i64, on_disk: bool) {
        let stored_path = ledger.storage_dir.join(format!("old_{filename}"));
        if on_disk {
            std::fs::write(&stored_path, b"old contents").unwrap();
        }
        let upload_time = Utc::now().naive_utc() - Duration::days(days_ago);
        let stored_path_str = stored_path.to_string_lossy().into_owned();
        insert_file(
            &ledger.conn,
            &NewEvidenceFile {
                filename,
                original_path: None,
                stored_path: &stored_path_str,
                file_hash: "deadbeef",
                file_size: 12,
                mime_type: None,
                upload_time,
                metadata: None,
            },
        )
        .unwrap();
    }

    #[test]
    fn store_writes_file_and_ledger_row() {
        let (_dir, ledger) = test_ledger();
        let stored = ledger.store(b"fir contents", "fir report.pdf", None).unwrap();

        assert_eq!(stored.filename, "fir report.pdf");
        assert!(stored.stored_path.ends_with("_fir_report.pdf"));
        assert!(Path::new(&stored.stored_path).exists());
        assert_eq!(stored.file_size, 12);
        assert_eq!(stored.mime_type.as_deref(), Some("application/pdf"));

        let row = get_file_by_filename(&ledger.conn, "fir report.pdf")
            .unwrap()
            .unwrap();
        assert_eq!(row.id, stored.id);
        assert_eq!(row.file_hash, stored.file_hash);
    }

    #[test]
    fn explicit_mime_type_wins_over_guess() {
        let (_dir, ledger) = test_ledger();
        let stored = ledger
            .store(b"bytes", "scan.pdf", Some("image/png"))
            .unwrap();
        assert_eq!(stored.mime_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        let (_dir, ledger) = test_ledger();
        let stored = ledger.store(b"bytes", "dump.xyzq", None).unwrap();
        assert_eq!(
            stored.mime_type.as_deref(),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn integrity_holds_for_untouched_file() {
        let (_dir, ledger) = test_ledger();
        ledger.store(b"fir contents", "fir.pdf", None).unwrap();
        assert!(ledger.verify_integrity("fir.pdf").unwrap());
    }

    #[test]
    fn integrity_fails_after_tampering() {
        let (_dir, ledger) = test_ledger();
        let stored = ledger.store(b"fir contents", "fir.pdf", None).unwrap();
        std::fs::write(&stored.stored_path, b"tampered").unwrap();
        assert!(!ledger.verify_integrity("fir.pdf").unwrap());
    }

    #[test]
    fn integrity_fails_when_stored_file_is_gone() {
        let (_dir, ledger) = test_ledger();
        let stored = ledger.store(b"fir contents", "fir.pdf", None).unwrap();
        std::fs::remove_file(&stored.stored_path).unwrap();
        assert!(!ledger.verify_integrity("fir.pdf").unwrap());
    }

    #[test]
    fn integrity_fails_for_unknown_filename() {
        let (_dir, ledger) = test_ledger();
        assert!(!ledger.verify_integrity("never-stored.pdf").unwrap());
    }

    #[test]
    fn link_and_fetch_round_trip() {
        let (_dir, ledger) = test_ledger();
        ledger.store(b"fir contents", "fir.pdf", None).unwrap();

        let event_id = Uuid::new_v4();
        let link = ledger
            .link(&event_id, "fir.pdf", Some(3), Some("FIR filed on 12/03/2021"), 0.8)
            .unwrap();
        assert_eq!(link.event_id, event_id);
        assert_eq!(link.page_number, Some(3));

        let records = ledger.evidence_for(&event_id).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "fir.pdf");
        assert_eq!(records[0].page_number, Some(3));
        assert_eq!(
            records[0].text_snippet.as_deref(),
            Some("FIR filed on 12/03/2021")
        );
        assert_eq!(records[0].confidence, 0.8);
    }

    #[test]
    fn link_to_unknown_file_errors() {
        let (_dir, ledger) = test_ledger();
        let err = ledger
            .link(&Uuid::new_v4(), "missing.pdf", None, None, 1.0)
            .unwrap_err();
        assert!(matches!(err, EvidenceError::FileNotFound(_)));
        assert!(err.to_string().contains("missing.pdf"));
    }

    #[test]
    fn citation_renders_linked_evidence() {
        let (_dir, ledger) = test_ledger();
        ledger.store(b"fir contents", "fir.pdf", None).unwrap();

        let event_id = Uuid::new_v4();
        ledger.link(&event_id, "fir.pdf", Some(3), None, 0.8).unwrap();

        let citation = ledger.citation_for(&event_id).unwrap();
        assert_eq!(citation, "[Source: fir.pdf, Page 3] (Confidence: 80.0%)");
    }

    #[test]
    fn citation_for_unlinked_event() {
        let (_dir, ledger) = test_ledger();
        let citation = ledger.citation_for(&Uuid::new_v4()).unwrap();
        assert_eq!(citation, "No evidence linked");
    }

    #[test]
    fn events_do_not_share_evidence() {
        let (_dir, ledger) = test_ledger();
        ledger.store(b"fir contents", "fir.pdf", None).unwrap();

        let linked = Uuid::new_v4();
        let unlinked = Uuid::new_v4();
        ledger.link(&linked, "fir.pdf", None, None, 1.0).unwrap();

        assert_eq!(ledger.evidence_for(&linked).unwrap().len(), 1);
        assert!(ledger.evidence_for(&unlinked).unwrap().is_empty());
    }

    #[test]
    fn cleanup_removes_old_keeps_recent() {
        let (_dir, ledger) = test_ledger();
        insert_backdated(&ledger, "ancient.pdf", 60, true);
        let recent = ledger.store(b"recent contents", "recent.pdf", None).unwrap();

        let removed = ledger.cleanup(30).unwrap();
        assert_eq!(removed, 1);

        assert!(get_file_by_filename(&ledger.conn, "ancient.pdf")
            .unwrap()
            .is_none());
        assert!(!ledger
            .storage_dir
            .join("old_ancient.pdf")
            .exists());
        assert!(Path::new(&recent.stored_path).exists());
        assert!(ledger.verify_integrity("recent.pdf").unwrap());
    }

    #[test]
    fn cleanup_cascades_links_of_removed_files() {
        let (_dir, ledger) = test_ledger();
        insert_backdated(&ledger, "ancient.pdf", 60, true);
        let event_id = Uuid::new_v4();
        ledger.link(&event_id, "ancient.pdf", None, None, 1.0).unwrap();

        ledger.cleanup(30).unwrap();
        assert!(ledger.evidence_for(&event_id).unwrap().is_empty());
    }

    #[test]
    fn cleanup_tolerates_already_missing_files() {
        let (_dir, ledger) = test_ledger();
        insert_backdated(&ledger, "ghost.pdf", 60, false);
        let removed = ledger.cleanup(30).unwrap();
        assert_eq!(removed, 1);
    }

    #[test]
    fn reopening_ledger_sees_existing_rows() {
        let dir = tempdir().unwrap();
        {
            let ledger = EvidenceLedger::open(dir.path()).unwrap();
            ledger.store(b"fir contents", "fir.pdf", None).unwrap();
        }
        let reopened = EvidenceLedger::open(dir.path()).unwrap();
        assert!(reopened.verify_integrity("fir.pdf").unwrap());
    }

    #[test]
    fn stored_name_prefix_is_upload_timestamp() {
        let (_dir, ledger) = test_ledger();
        let stored = ledger.store(b"bytes", "fir.pdf", None).unwrap();
        let name = Path::new(&stored.stored_path)
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        let prefix = &name[..15];
        assert!(NaiveDate::parse_from_str(&prefix[..8], "%Y%m%d").is_ok());
        assert_eq!(&prefix[8..9], "_");
    }
}
