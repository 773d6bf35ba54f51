//! Evidence link repository — joins timeline events to stored files.

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::EvidenceRecord;

/// Insert payload for a new event-to-file link.
#[derive(Debug)]
pub struct NewEvidenceLink<'a> {
    pub event_id: &'a Uuid,
    pub file_id: i64,
    pub page_number: Option<i64>,
    pub text_snippet: Option<&'a str>,
    pub confidence: f32,
    pub created_time: NaiveDateTime,
}

pub fn insert_link(conn: &Connection, link: &NewEvidenceLink) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO evidence_links (event_id, file_id, page_number, text_snippet, confidence, created_time)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            link.event_id.to_string(),
            link.file_id,
            link.page_number,
            link.text_snippet,
            link.confidence as f64,
            link.created_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Fetch the evidence behind an event, joined with file details,
/// in link creation order.
pub fn get_records_by_event(
    conn: &Connection,
    event_id: &Uuid,
) -> Result<Vec<EvidenceRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT ef.filename, ef.stored_path, ef.file_hash, ef.mime_type,
                el.page_number, el.text_snippet, el.confidence
         FROM evidence_links el
         JOIN evidence_files ef ON el.file_id = ef.id
         WHERE el.event_id = ?1
         ORDER BY el.created_time, el.id",
    )?;
    let rows = stmt.query_map(params![event_id.to_string()], |row| {
        Ok(EvidenceRecord {
            filename: row.get(0)?,
            stored_path: row.get(1)?,
            file_hash: row.get(2)?,
            mime_type: row.get(3)?,
            page_number: row.get(4)?,
            text_snippet: row.get(5)?,
            confidence: row.get::<_, Option<f64>>(6)?.unwrap_or(0.0) as f32,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }
    Ok(records)
}
