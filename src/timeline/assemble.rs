use chrono::Utc;

use super::order::sort_chronological;
use super::types::{SourceDocument, TimelineFilter, TimelineSummary};
use crate::config::{APP_NAME, APP_VERSION, EXTRACTION_METHOD};
use crate::extraction_config::ExtractionConfig;
use crate::models::TimelineEvent;
use crate::pipeline::entities::EntityRecognizer;
use crate::pipeline::extract_document;

/// Extract every document and merge the results into one case timeline.
///
/// Deduplication stays per document inside extraction; the merge only
/// re-orders.
pub fn assemble(
    documents: &[SourceDocument],
    config: &ExtractionConfig,
    recognizer: &dyn EntityRecognizer,
) -> Vec<TimelineEvent> {
    let per_document = documents
        .iter()
        .map(|doc| extract_document(&doc.text, &doc.metadata, config, recognizer))
        .collect();
    merge(per_document)
}

/// Merge per-document timelines into one case timeline.
///
/// Events keep their per-document deduplication; the same occurrence
/// reported by two different files stays twice, because each copy is
/// attributed to its own source. The merged list is re-ordered with the
/// same rule used for single documents.
pub fn merge(per_document: Vec<Vec<TimelineEvent>>) -> Vec<TimelineEvent> {
    let mut merged: Vec<TimelineEvent> = per_document.into_iter().flatten().collect();
    sort_chronological(&mut merged);
    merged
}

/// Apply display filters without touching relative order.
pub fn apply_filter(events: Vec<TimelineEvent>, filter: &TimelineFilter) -> Vec<TimelineEvent> {
    events
        .into_iter()
        .filter(|e| e.confidence >= filter.min_confidence)
        .filter(|e| match &filter.source_files {
            Some(files) => e
                .source_metadata
                .as_ref()
                .is_some_and(|m| files.contains(&m.filename)),
            None => true,
        })
        .collect()
}

/// Build the export header for a timeline.
pub fn summarize(events: &[TimelineEvent]) -> TimelineSummary {
    let mut source_files = Vec::new();
    for event in events {
        if let Some(meta) = &event.source_metadata {
            if !source_files.contains(&meta.filename) {
                source_files.push(meta.filename.clone());
            }
        }
    }

    TimelineSummary {
        generated_at: Utc::now().naive_utc(),
        total_events: events.len(),
        source_files,
        extraction_method: EXTRACTION_METHOD.to_string(),
        system_version: format!("{APP_NAME} v{APP_VERSION}"),
    }
}
