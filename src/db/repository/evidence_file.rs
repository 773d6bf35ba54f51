//! Evidence file repository — ledger rows for stored source documents.

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::EvidenceFile;

/// Insert payload for a new evidence file row.
#[derive(Debug)]
pub struct NewEvidenceFile<'a> {
    pub filename: &'a str,
    pub original_path: Option<&'a str>,
    pub stored_path: &'a str,
    pub file_hash: &'a str,
    pub file_size: u64,
    pub mime_type: Option<&'a str>,
    pub upload_time: NaiveDateTime,
    pub metadata: Option<&'a str>,
}

pub fn insert_file(conn: &Connection, file: &NewEvidenceFile) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO evidence_files
            (filename, original_path, stored_path, file_hash, file_size, mime_type, upload_time, metadata)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            file.filename,
            file.original_path,
            file.stored_path,
            file.file_hash,
            file.file_size as i64,
            file.mime_type,
            file.upload_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            file.metadata,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

// Intermediate row struct to avoid lifetime issues with query_row closures
struct EvidenceFileRow {
    id: i64,
    filename: String,
    original_path: Option<String>,
    stored_path: String,
    file_hash: String,
    file_size: Option<i64>,
    mime_type: Option<String>,
    upload_time: String,
    metadata: Option<String>,
}

fn file_from_row(row: EvidenceFileRow) -> EvidenceFile {
    let upload_time = NaiveDateTime::parse_from_str(&row.upload_time, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&row.upload_time, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(&row.upload_time, "%Y-%m-%dT%H:%M:%S"))
        .unwrap_or_default();

    EvidenceFile {
        id: row.id,
        filename: row.filename,
        original_path: row.original_path,
        stored_path: row.stored_path,
        file_hash: row.file_hash,
        file_size: row.file_size.unwrap_or(0) as u64,
        mime_type: row.mime_type,
        upload_time,
        metadata: row.metadata,
    }
}

fn row_to_struct(row: &rusqlite::Row) -> rusqlite::Result<EvidenceFileRow> {
    Ok(EvidenceFileRow {
        id: row.get(0)?,
        filename: row.get(1)?,
        original_path: row.get(2)?,
        stored_path: row.get(3)?,
        file_hash: row.get(4)?,
        file_size: row.get(5)?,
        mime_type: row.get(6)?,
        upload_time: row.get(7)?,
        metadata: row.get(8)?,
    })
}

/// Look up a file by its ledger filename. When the same filename was
/// stored more than once the earliest row wins.
pub fn get_file_by_filename(
    conn: &Connection,
    filename: &str,
) -> Result<Option<EvidenceFile>, DatabaseError> {
    let result = conn.query_row(
        "SELECT id, filename, original_path, stored_path, file_hash, file_size, mime_type, upload_time, metadata
         FROM evidence_files WHERE filename = ?1 ORDER BY id LIMIT 1",
        params![filename],
        row_to_struct,
    );

    match result {
        Ok(row) => Ok(Some(file_from_row(row))),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// List files uploaded strictly before the cutoff, oldest first.
pub fn list_files_older_than(
    conn: &Connection,
    cutoff: NaiveDateTime,
) -> Result<Vec<EvidenceFile>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, filename, original_path, stored_path, file_hash, file_size, mime_type, upload_time, metadata
         FROM evidence_files WHERE upload_time < ?1 ORDER BY upload_time, id",
    )?;
    let rows = stmt.query_map(
        params![cutoff.format("%Y-%m-%d %H:%M:%S").to_string()],
        row_to_struct,
    )?;

    let mut files = Vec::new();
    for row in rows {
        files.push(file_from_row(row?));
    }
    Ok(files)
}

/// Delete ledger rows uploaded strictly before the cutoff. Links cascade.
pub fn delete_files_older_than(
    conn: &Connection,
    cutoff: NaiveDateTime,
) -> Result<usize, DatabaseError> {
    let deleted = conn.execute(
        "DELETE FROM evidence_files WHERE upload_time < ?1",
        params![cutoff.format("%Y-%m-%d %H:%M:%S").to_string()],
    )?;
    Ok(deleted)
}
