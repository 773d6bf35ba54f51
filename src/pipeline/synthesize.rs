//! Fusion of dates, event matches, and entities into timeline events.
//!
//! Each event candidate is anchored to the nearest date span in its chunk
//! and annotated with every relevant entity inside the proximity window.
//! Distances are measured between span start positions, in characters.

use std::collections::BTreeSet;

use uuid::Uuid;

use crate::models::{
    DateSpan, DocumentMetadata, EntitySpan, EventCandidate, TimelineEvent, UNKNOWN_DATE,
};

/// Confidence ceiling for events with no date anywhere in their chunk.
const NO_DATE_CONFIDENCE: f32 = 0.5;

/// Namespace for deriving stable event ids.
const EVENT_NAMESPACE: Uuid = Uuid::from_u128(0x1c8f_2d4a_e95b_4f0c_9a7d_3e6b_5f4a_2c91);

/// Combine the per-chunk extraction passes into finalized events.
///
/// Every candidate produces exactly one event. A candidate with no date in
/// reach is kept with [`UNKNOWN_DATE`] and its confidence capped at 0.5;
/// the overall confidence is never higher than its weakest component.
pub fn synthesize_chunk(
    chunk_index: usize,
    dates: &[DateSpan],
    candidates: Vec<EventCandidate>,
    entities: &[EntitySpan],
    entity_window_chars: usize,
    metadata: &DocumentMetadata,
) -> Vec<TimelineEvent> {
    let mut events = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let closest = closest_date(dates, candidate.start);

        let date = match closest {
            Some(d) => d.date_string().to_string(),
            None => UNKNOWN_DATE.to_string(),
        };

        let attached: BTreeSet<String> = entities
            .iter()
            .filter(|e| e.label.is_relevant())
            .filter(|e| e.span.start.abs_diff(candidate.start) < entity_window_chars)
            .map(|e| e.span.text.clone())
            .collect();

        let date_confidence = closest.map_or(NO_DATE_CONFIDENCE, |d| d.span.confidence);
        let confidence = candidate.confidence.min(date_confidence);

        let id = event_id(metadata, chunk_index, &date, &candidate.description, &attached);

        events.push(TimelineEvent {
            id,
            date,
            event: candidate.description,
            text: candidate.text,
            context: candidate.context,
            entities: attached,
            event_type: candidate.event_type,
            confidence,
            chunk_index,
            source_metadata: Some(metadata.clone()),
        });
    }

    events
}

/// Nearest date span to an event start. Ties keep the date that appears
/// first in the document.
fn closest_date(dates: &[DateSpan], event_start: usize) -> Option<&DateSpan> {
    let mut closest = None;
    let mut min_distance = usize::MAX;
    for date in dates {
        let distance = date.span.start.abs_diff(event_start);
        if distance < min_distance {
            min_distance = distance;
            closest = Some(date);
        }
    }
    closest
}

/// Derive the event id from everything that makes the event what it is.
/// Re-running extraction over the same file reproduces the same ids, which
/// is what keeps stored evidence links valid.
fn event_id(
    metadata: &DocumentMetadata,
    chunk_index: usize,
    date: &str,
    description: &str,
    entities: &BTreeSet<String>,
) -> Uuid {
    let entity_list = entities.iter().cloned().collect::<Vec<_>>().join(",");
    let name = format!(
        "{}|{}|{}|{}|{}",
        metadata.filename, chunk_index, date, description, entity_list
    );
    Uuid::new_v5(&EVENT_NAMESPACE, name.as_bytes())
}
