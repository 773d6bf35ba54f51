//! Statistical NER backend over HTTP.

use serde::{Deserialize, Serialize};

use super::lexicon::LexiconRecognizer;
use super::{EntityRecognizer, RecognizerError};
use crate::models::enums::{EntityLabel, RecognizerKind};
use crate::models::{EntitySpan, TextSpan};

/// HTTP client for a sequence-tagging NER service.
///
/// Model spans come first in the returned stream; the lexicon baseline
/// always contributes as well, and still covers the chunk on its own
/// when the service is unreachable.
pub struct ModelRecognizer {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
    word_limit: usize,
    lexicon: LexiconRecognizer,
}

impl ModelRecognizer {
    /// Create a recognizer pointing at a tagging service.
    pub fn new(base_url: &str, timeout_secs: u64, word_limit: usize) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
            word_limit,
            lexicon: LexiconRecognizer::new(),
        }
    }

    /// Default local tagging service with a 500-word window.
    pub fn default_local() -> Self {
        Self::new("http://localhost:8000", 60, 500)
    }

    fn fetch_model_spans(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        let url = format!("{}/ner", self.base_url);
        let body = NerRequest { text };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                RecognizerError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                RecognizerError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                RecognizerError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RecognizerError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: NerResponse = response
            .json()
            .map_err(|e| RecognizerError::ResponseParsing(e.to_string()))?;

        Ok(parsed
            .entities
            .into_iter()
            .filter_map(entity_to_span)
            .collect())
    }
}

impl EntityRecognizer for ModelRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        let truncated = truncate_words(text, self.word_limit);

        let mut spans = match self.fetch_model_spans(truncated) {
            Ok(spans) => spans,
            Err(e) => {
                tracing::warn!(error = %e, "NER service unavailable, continuing with lexicon only");
                Vec::new()
            }
        };

        spans.extend(self.lexicon.recognize(text)?);
        Ok(spans)
    }
}

/// Request body for the tagging service
#[derive(Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

/// Response body from the tagging service
#[derive(Deserialize)]
struct NerResponse {
    entities: Vec<NerEntity>,
}

/// One span as reported by the service; offsets are character
/// positions into the submitted text.
#[derive(Deserialize)]
struct NerEntity {
    word: String,
    entity_group: String,
    start: usize,
    end: usize,
    score: f32,
}

fn entity_to_span(entity: NerEntity) -> Option<EntitySpan> {
    let label = map_label(&entity.entity_group)?;
    Some(EntitySpan {
        span: TextSpan {
            text: entity.word,
            start: entity.start,
            end: entity.end,
            confidence: entity.score,
        },
        label,
        source: RecognizerKind::Model,
    })
}

/// Map service tag sets (CoNLL-style and spaCy-style) onto our labels.
/// Unknown tags are dropped.
fn map_label(tag: &str) -> Option<EntityLabel> {
    match tag.to_ascii_uppercase().as_str() {
        "PER" | "PERSON" => Some(EntityLabel::Person),
        "ORG" | "ORGANIZATION" => Some(EntityLabel::Organization),
        "LOC" | "GPE" | "LOCATION" => Some(EntityLabel::Location),
        "LAW" => Some(EntityLabel::Law),
        "MONEY" => Some(EntityLabel::Money),
        "DATE" => Some(EntityLabel::Date),
        _ => None,
    }
}

/// Cut text after `limit` whitespace-separated words, preserving the
/// original offsets of everything kept. Text beyond the window is
/// silently dropped.
fn truncate_words(text: &str, limit: usize) -> &str {
    let mut words = 0;
    let mut in_word = false;
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            words += 1;
            if words > limit {
                return &text[..i];
            }
        }
    }
    text
}

/// Mock recognizer for testing; returns canned spans or a connection error.
pub struct MockRecognizer {
    spans: Vec<EntitySpan>,
    fail: bool,
}

impl MockRecognizer {
    pub fn new(spans: Vec<EntitySpan>) -> Self {
        Self { spans, fail: false }
    }

    /// A recognizer whose every call fails.
    pub fn failing() -> Self {
        Self {
            spans: Vec::new(),
            fail: true,
        }
    }
}

impl EntityRecognizer for MockRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        if self.fail {
            return Err(RecognizerError::Connection("mock".to_string()));
        }
        Ok(self.spans.clone())
    }
}
