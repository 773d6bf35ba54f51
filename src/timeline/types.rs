use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::DocumentMetadata;

/// One adapter-extracted document, ready for timeline assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Filter parameters applied to an assembled timeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TimelineFilter {
    /// Events strictly below this confidence are dropped.
    pub min_confidence: f32,
    /// Restrict to events from these source files. `None` keeps all
    /// sources; an event with no source attribution only survives when
    /// no restriction is set.
    pub source_files: Option<Vec<String>>,
}

/// Header block for exports: what was analyzed, when, and by which system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineSummary {
    pub generated_at: NaiveDateTime,
    pub total_events: usize,
    /// Source filenames in first-appearance order, deduplicated.
    pub source_files: Vec<String>,
    pub extraction_method: String,
    pub system_version: String,
}
