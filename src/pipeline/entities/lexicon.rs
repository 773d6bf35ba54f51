//! Deterministic lexicon-based entity tagging.
//!
//! A cue-anchored tagger for the labels the synthesizer cares about.
//! Precision over recall: every rule needs an explicit textual anchor
//! (honorific, institutional suffix, preposition, statute keyword),
//! so output is stable across runs and needs no external service.

use std::sync::LazyLock;

use regex::Regex;

use super::{EntityRecognizer, RecognizerError};
use crate::models::enums::{EntityLabel, RecognizerKind};
use crate::models::{EntitySpan, TextSpan};
use crate::pipeline::offsets::CharIndex;

/// Fixed confidence for lexicon-tagged entities.
pub const LEXICON_CONFIDENCE: f32 = 0.8;

/// A tagging rule; `group` selects which capture carries the entity.
struct LexiconRule {
    regex: Regex,
    label: EntityLabel,
    group: usize,
}

static LEXICON_RULES: LazyLock<Vec<LexiconRule>> = LazyLock::new(|| {
    vec![
        // Honorific-anchored personal names: "Mr. Sharma", "Justice Verma".
        // The capture excludes the honorific itself.
        tag(
            r"\b(?:Mr|Mrs|Ms|Dr|Shri|Smt|Justice|Adv)\.?\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
            EntityLabel::Person,
            1,
        ),
        // Institutional suffixes: "Acme Industries Ltd", "Delhi High Court"
        tag(
            r"\b[A-Z][A-Za-z&']*(?:\s+[A-Z][A-Za-z&']*)*\s+(?:Ltd|Limited|Corp|Corporation|Company|Court|Tribunal|Commission|Authority|Department|Ministry|Bank|Police)\b",
            EntityLabel::Organization,
            0,
        ),
        // Place names after locational prepositions: "at Mumbai", "in New Delhi"
        tag(
            r"\b(?:at|in|near)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\b",
            EntityLabel::Location,
            1,
        ),
        // Statutory references: "Section 302", "Article 21"
        tag(
            r"\b(?:Section|Sec\.|Article|Art\.)\s*\d+[A-Z]?\b",
            EntityLabel::Law,
            0,
        ),
        // Named statutes: "Companies Act, 2013"
        tag(r"\b[A-Z][A-Za-z ]+Act,?\s+\d{4}\b", EntityLabel::Law, 0),
        // Monetary amounts: "₹5,00,000", "Rs. 2 lakh"
        tag(
            r"(?:₹|\bRs\.?|\bINR)\s*\d[\d,]*(?:\.\d+)?(?:\s*(?:lakh|lakhs|crore|crores))?",
            EntityLabel::Money,
            0,
        ),
        // Bare numeric dates, kept in the raw span stream
        tag(r"\b\d{1,2}[-/.]\d{1,2}[-/.]\d{4}\b", EntityLabel::Date, 0),
    ]
});

fn tag(regex_str: &str, label: EntityLabel, group: usize) -> LexiconRule {
    LexiconRule {
        regex: Regex::new(regex_str).expect("Invalid lexicon pattern"),
        label,
        group,
    }
}

/// Month words that the location rule must not mistake for places
/// ("hearing in March").
const CALENDAR_WORDS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep",
    "Sept", "Oct", "Nov", "Dec",
];

fn is_calendar_word(text: &str) -> bool {
    let first = text.split_whitespace().next().unwrap_or("");
    CALENDAR_WORDS.iter().any(|m| first.eq_ignore_ascii_case(m))
}

/// Offline tagger with fixed confidence. Always available, fully
/// deterministic for a given input.
#[derive(Default)]
pub struct LexiconRecognizer;

impl LexiconRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for LexiconRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        let index = CharIndex::new(text);
        let mut spans = Vec::new();

        for rule in LEXICON_RULES.iter() {
            for caps in rule.regex.captures_iter(text) {
                let Some(mat) = caps.get(rule.group) else {
                    continue;
                };
                if rule.label == EntityLabel::Location && is_calendar_word(mat.as_str()) {
                    continue;
                }
                spans.push(EntitySpan {
                    span: TextSpan {
                        text: mat.as_str().to_string(),
                        start: index.char_at(mat.start()),
                        end: index.char_at(mat.end()),
                        confidence: LEXICON_CONFIDENCE,
                    },
                    label: rule.label.clone(),
                    source: RecognizerKind::Lexicon,
                });
            }
        }

        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognize(text: &str) -> Vec<EntitySpan> {
        LexiconRecognizer::new().recognize(text).unwrap()
    }

    fn texts_with_label(spans: &[EntitySpan], label: EntityLabel) -> Vec<&str> {
        spans
            .iter()
            .filter(|s| s.label == label)
            .map(|s| s.span.text.as_str())
            .collect()
    }

    #[test]
    fn honorific_person_captured_without_title() {
        let spans = recognize("FIR filed against Mr. Sharma yesterday");
        let persons = texts_with_label(&spans, EntityLabel::Person);
        assert_eq!(persons, vec!["Sharma"]);
    }

    #[test]
    fn multi_word_name_captured_whole() {
        let spans = recognize("Justice Rajesh Verma presided over the matter");
        let persons = texts_with_label(&spans, EntityLabel::Person);
        assert_eq!(persons, vec!["Rajesh Verma"]);
    }

    #[test]
    fn organization_by_institutional_suffix() {
        let spans = recognize("employed by Acme Industries Ltd since 2019");
        let orgs = texts_with_label(&spans, EntityLabel::Organization);
        assert_eq!(orgs, vec!["Acme Industries Ltd"]);
    }

    #[test]
    fn court_tagged_as_organization() {
        let spans = recognize("argued before the Delhi High Court");
        let orgs = texts_with_label(&spans, EntityLabel::Organization);
        assert!(orgs.contains(&"Delhi High Court"));
    }

    #[test]
    fn location_after_preposition() {
        let spans = recognize("the incident occurred at Mumbai on that night");
        let locations = texts_with_label(&spans, EntityLabel::Location);
        assert_eq!(locations, vec!["Mumbai"]);
    }

    #[test]
    fn two_word_location() {
        let spans = recognize("registered in New Delhi last week");
        let locations = texts_with_label(&spans, EntityLabel::Location);
        assert_eq!(locations, vec!["New Delhi"]);
    }

    #[test]
    fn month_after_preposition_is_not_a_location() {
        let spans = recognize("the hearing in March 2026 was adjourned");
        assert!(texts_with_label(&spans, EntityLabel::Location).is_empty());
    }

    #[test]
    fn statutory_reference_tagged_law() {
        let spans = recognize("charged under Section 302 of the penal code");
        let laws = texts_with_label(&spans, EntityLabel::Law);
        assert_eq!(laws, vec!["Section 302"]);
    }

    #[test]
    fn named_statute_tagged_law() {
        let spans = recognize("as required by the Companies Act, 2013");
        let laws = texts_with_label(&spans, EntityLabel::Law);
        assert_eq!(laws, vec!["Companies Act, 2013"]);
    }

    #[test]
    fn money_amounts_tagged() {
        let spans = recognize("a penalty of ₹5,00,000 plus Rs. 2 lakh in costs");
        let money = texts_with_label(&spans, EntityLabel::Money);
        assert_eq!(money.len(), 2);
        assert!(money.contains(&"₹5,00,000"));
        assert!(money.contains(&"Rs. 2 lakh"));
    }

    #[test]
    fn numeric_dates_kept_in_span_stream() {
        let spans = recognize("the deed dated 15/03/2026 was produced");
        let dates = texts_with_label(&spans, EntityLabel::Date);
        assert_eq!(dates, vec!["15/03/2026"]);
    }

    #[test]
    fn spans_carry_fixed_confidence_and_source() {
        let spans = recognize("notice served on Mr. Gupta at Pune");
        assert!(!spans.is_empty());
        for span in &spans {
            assert!((span.span.confidence - LEXICON_CONFIDENCE).abs() < 1e-6);
            assert_eq!(span.source, RecognizerKind::Lexicon);
        }
    }

    #[test]
    fn offsets_are_char_positions() {
        let spans = recognize("आरोपी Mr. Sharma को");
        let person = spans
            .iter()
            .find(|s| s.label == EntityLabel::Person)
            .unwrap();
        assert_eq!(person.span.text, "Sharma");
        // "आरोपी " is 6 chars, "Mr. " is 4 more
        assert_eq!(person.span.start, 10);
    }

    #[test]
    fn recognition_is_deterministic() {
        let text = "Mr. Sharma appeared at Mumbai before the Delhi High Court under Section 302";
        let first = recognize(text);
        let second = recognize(text);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.span.text, b.span.text);
            assert_eq!(a.label, b.label);
            assert_eq!(a.span.start, b.span.start);
        }
    }
}
