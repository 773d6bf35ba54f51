use serde::{Deserialize, Serialize};

use super::enums::{EntityLabel, EventType, RecognizerKind};

/// A contiguous text region inside one chunk.
///
/// `start`/`end` are character positions relative to the chunk that produced
/// the span, not byte offsets and not positions in the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f32,
}

/// A calendar date recognized in text.
///
/// `normalized` holds the canonical `YYYY-MM-DD` form when one of the known
/// templates parsed the match; `None` means the verbatim text is all we have.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateSpan {
    pub span: TextSpan,
    pub normalized: Option<String>,
}

impl DateSpan {
    /// The date string carried into timeline events: canonical form when
    /// available, verbatim match otherwise.
    pub fn date_string(&self) -> &str {
        self.normalized.as_deref().unwrap_or(&self.span.text)
    }
}

/// A labeled entity recognized in text, tagged with the backend it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySpan {
    pub span: TextSpan,
    pub label: EntityLabel,
    pub source: RecognizerKind,
}

/// A pattern-matched legal-process occurrence, prior to date and entity
/// anchoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCandidate {
    pub text: String,
    /// Surrounding text captured for audit display, clipped to the chunk.
    pub context: String,
    pub event_type: EventType,
    pub description: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f32,
}
