//! Extraction tunables supplied by the caller.
//!
//! The proximity and window constants default to the values the pipeline was
//! calibrated with; they are configuration, not law, so callers working with
//! unusual document shapes can widen or narrow them per run.

use serde::{Deserialize, Serialize};

use crate::models::enums::RecognizerKind;

/// Configuration for one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Character window each document is partitioned into. Chunks are
    /// non-overlapping; a date and its event split across a boundary is an
    /// accepted precision loss.
    pub chunk_chars: usize,
    /// Entities further than this many characters from an event match are
    /// not attached to it.
    pub entity_window_chars: usize,
    /// Characters of surrounding text captured on each side of an event
    /// match for audit display.
    pub context_radius_chars: usize,
    /// Statistical recognizer input cap, in whitespace-delimited words.
    /// Text beyond the cap is silently dropped.
    pub model_word_limit: usize,
    /// Events below this confidence are dropped from the extraction output.
    pub confidence_threshold: f32,
    /// Per-document cap on emitted events; highest-confidence events win.
    /// `None` keeps everything.
    pub max_events: Option<usize>,
    /// Which entity recognizer backend to run.
    pub recognizer: RecognizerKind,
    /// Base URL of the tagging service, used when `recognizer` is `Model`.
    pub model_base_url: String,
    /// HTTP timeout for tagging service calls, in seconds.
    pub model_timeout_secs: u64,
    /// Keep dates that failed canonical normalization as verbatim text
    /// instead of discarding them.
    pub fuzzy_dates: bool,
    /// Fan chunk work out across a thread pool. Output is identical either
    /// way; chunks join in index order.
    pub parallel_chunks: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            chunk_chars: 1000,
            entity_window_chars: 200,
            context_radius_chars: 100,
            model_word_limit: 500,
            confidence_threshold: 0.0,
            max_events: None,
            recognizer: RecognizerKind::Lexicon,
            model_base_url: "http://localhost:8000".to_string(),
            model_timeout_secs: 60,
            fuzzy_dates: true,
            parallel_chunks: false,
        }
    }
}
