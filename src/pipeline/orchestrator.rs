//! Per-document extraction pass.
//!
//! Splits the text into fixed windows, runs the date, event, and entity
//! passes over each window, fuses them into events, then deduplicates and
//! orders the result. A window whose entity pass fails is logged and
//! skipped; the rest of the document still extracts.

use rayon::prelude::*;

use crate::extraction_config::ExtractionConfig;
use crate::models::{DocumentMetadata, TimelineEvent};
use crate::pipeline::chunker::{Chunker, FixedWindowChunker, TextChunk};
use crate::pipeline::dates::detect_dates;
use crate::pipeline::entities::{EntityRecognizer, RecognizerError};
use crate::pipeline::patterns::scan_events;
use crate::pipeline::synthesize::synthesize_chunk;
use crate::timeline::{deduplicate, sort_chronological};

/// Extract every timeline event from one document's text.
///
/// Output is deduplicated and chronologically ordered. Events below
/// `config.confidence_threshold` are dropped, and when `config.max_events`
/// is set the cap is applied before ordering, so the highest-confidence
/// events are the ones kept.
pub fn extract_document(
    text: &str,
    metadata: &DocumentMetadata,
    config: &ExtractionConfig,
    recognizer: &dyn EntityRecognizer,
) -> Vec<TimelineEvent> {
    tracing::info!(filename = %metadata.filename, "Extracting events");

    let chunker = FixedWindowChunker::new(config.chunk_chars);
    let chunks = chunker.chunk(text);

    let process = |chunk: &TextChunk| -> Result<Vec<TimelineEvent>, RecognizerError> {
        let mut dates = detect_dates(&chunk.content);
        if !config.fuzzy_dates {
            dates.retain(|d| d.normalized.is_some());
        }
        let candidates = scan_events(&chunk.content, config.context_radius_chars);
        let entities = recognizer.recognize(&chunk.content)?;
        Ok(synthesize_chunk(
            chunk.chunk_index,
            &dates,
            candidates,
            &entities,
            config.entity_window_chars,
            metadata,
        ))
    };

    // Chunks are independent; results rejoin in index order either way.
    let results: Vec<Result<Vec<TimelineEvent>, RecognizerError>> = if config.parallel_chunks {
        chunks.par_iter().map(process).collect()
    } else {
        chunks.iter().map(process).collect()
    };

    let mut collected = Vec::new();
    for (chunk, result) in chunks.iter().zip(results) {
        match result {
            Ok(events) => collected.extend(events),
            Err(e) => {
                tracing::warn!(
                    chunk_index = chunk.chunk_index,
                    error = %e,
                    "Entity pass failed, skipping chunk"
                );
            }
        }
    }

    let mut events = deduplicate(collected);
    events.retain(|e| e.confidence >= config.confidence_threshold);
    if let Some(max) = config.max_events {
        events.truncate(max);
    }
    sort_chronological(&mut events);

    tracing::info!(
        filename = %metadata.filename,
        events = events.len(),
        "Extraction complete"
    );
    events
}
