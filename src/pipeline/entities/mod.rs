//! Entity recognition backends.

pub mod lexicon;
pub mod model;

pub use lexicon::*;
pub use model::*;

use thiserror::Error;

use crate::extraction_config::ExtractionConfig;
use crate::models::enums::RecognizerKind;
use crate::models::EntitySpan;

#[derive(Error, Debug)]
pub enum RecognizerError {
    #[error("Cannot reach NER service at {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("NER service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Failed to parse NER response: {0}")]
    ResponseParsing(String),
}

/// Capability seam over entity recognition strategies.
///
/// Implementations report spans with character offsets into the given
/// text. Span streams from different backends may overlap; consumers
/// deduplicate at the entity-text level, not geometrically.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError>;
}

/// Build the recognizer selected by configuration.
pub fn recognizer_for(config: &ExtractionConfig) -> Box<dyn EntityRecognizer> {
    match config.recognizer {
        RecognizerKind::Model => Box::new(ModelRecognizer::new(
            &config.model_base_url,
            config.model_timeout_secs,
            config.model_word_limit,
        )),
        RecognizerKind::Lexicon => Box::new(LexiconRecognizer::new()),
    }
}
