use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{TimelineEvent, UNKNOWN_DATE};

/// Collapse events that describe the same occurrence.
///
/// Events are ranked by confidence, highest first, and the first event
/// seen for each identity key survives. The returned list keeps that
/// confidence ordering; callers re-sort chronologically afterwards.
pub fn deduplicate(mut events: Vec<TimelineEvent>) -> Vec<TimelineEvent> {
    events.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(events.len());
    for event in events {
        if seen.insert(event.identity_key()) {
            unique.push(event);
        }
    }
    unique
}

/// Order events by date, earliest first.
///
/// When every dated event carries a canonical `YYYY-MM-DD` string, the
/// sort is calendar-aware and undated events go first. If any date failed
/// normalization the whole list falls back to lexicographic ordering on
/// the date strings, so mixed runs stay deterministic instead of
/// interleaving two orderings.
pub fn sort_chronological(events: &mut [TimelineEvent]) {
    let calendar_sortable = events
        .iter()
        .all(|e| e.date == UNKNOWN_DATE || parse_canonical(&e.date).is_some());

    if calendar_sortable {
        events.sort_by_key(|e| parse_canonical(&e.date).unwrap_or(NaiveDate::MIN));
    } else {
        events.sort_by(|a, b| a.date.cmp(&b.date));
    }
}

fn parse_canonical(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
