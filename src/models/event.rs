use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{DocumentType, EventType};

/// Date string carried by events that had no date anywhere in their chunk.
pub const UNKNOWN_DATE: &str = "Unknown";

/// The finalized, date-anchored, entity-annotated unit of output.
///
/// Events are recomputed on every extraction run and never persisted on
/// their own; only evidence links reference them durably, via `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Deterministic id: identical input text and metadata always reproduce
    /// the same id, so evidence links survive re-extraction.
    pub id: Uuid,
    /// `YYYY-MM-DD`, a verbatim unparseable date string, or [`UNKNOWN_DATE`].
    pub date: String,
    /// Human-readable event description from the rule table.
    pub event: String,
    pub text: String,
    pub context: String,
    /// Entity texts attached by proximity. Sorted set: membership is what
    /// matters, and the sorted order keeps output identical between runs.
    pub entities: BTreeSet<String>,
    pub event_type: EventType,
    pub confidence: f32,
    pub chunk_index: usize,
    pub source_metadata: Option<DocumentMetadata>,
}

impl TimelineEvent {
    /// Identity for deduplication: two events are the same occurrence when
    /// they share a date, a description, and an entity set.
    pub fn identity_key(&self) -> (String, String, Vec<String>) {
        (
            self.date.clone(),
            self.event.clone(),
            self.entities.iter().cloned().collect(),
        )
    }
}

/// Metadata record handed over by the text-extraction adapters, carried on
/// every event so exporters can attribute output to its source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub filename: String,
    pub size: u64,
    pub sha256_hash: String,
    pub upload_time: NaiveDateTime,
    pub stored_path: String,
    pub doc_type: DocumentType,
    pub text_length: usize,
    pub word_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(date: &str, event: &str, entities: &[&str]) -> TimelineEvent {
        TimelineEvent {
            id: Uuid::nil(),
            date: date.into(),
            event: event.into(),
            text: "arrest of the accused".into(),
            context: "context".into(),
            entities: entities.iter().map(|s| s.to_string()).collect(),
            event_type: EventType::Arrest,
            confidence: 0.7,
            chunk_index: 0,
            source_metadata: None,
        }
    }

    #[test]
    fn identity_key_entity_order_is_canonical() {
        let a = sample_event("2021-03-12", "Arrest Made", &["Sharma", "Delhi Police"]);
        let b = sample_event("2021-03-12", "Arrest Made", &["Delhi Police", "Sharma"]);
        assert_eq!(a.identity_key(), b.identity_key());
    }

    #[test]
    fn identity_key_distinguishes_dates() {
        let a = sample_event("2021-03-12", "Arrest Made", &["Sharma"]);
        let b = sample_event("2021-03-13", "Arrest Made", &["Sharma"]);
        assert_ne!(a.identity_key(), b.identity_key());
    }

    #[test]
    fn entities_serialize_as_list() {
        let event = sample_event("Unknown", "Arrest Made", &["Sharma"]);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"entities\":[\"Sharma\"]"));
    }
}
