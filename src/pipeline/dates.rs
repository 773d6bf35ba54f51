//! Date detection and ISO normalization.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::offsets::CharIndex;
use crate::models::{DateSpan, TextSpan};

/// Fixed confidence for regex-detected dates.
pub const DATE_CONFIDENCE: f32 = 0.9;

/// Textual date patterns, in detection order.
static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // 15/03/2026, 15-03-2026, 15.03.2026
        date_pattern(r"\d{1,2}[-/.]\d{1,2}[-/.]\d{4}"),
        // 2026/03/15, 2026-03-15
        date_pattern(r"\d{4}[-/.]\d{1,2}[-/.]\d{1,2}"),
        // 15 March 2026
        date_pattern(r"(?i)\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}"),
        // March 15, 2026
        date_pattern(r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{4}"),
        // 15th March 2026
        date_pattern(r"(?i)\d{1,2}(?:st|nd|rd|th)?\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4}"),
    ]
});

/// Ordinal day suffixes ("15th", "2nd") that calendar parsing rejects.
static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| date_pattern(r"(?i)(\d{1,2})(?:st|nd|rd|th)\b"));

fn date_pattern(regex_str: &str) -> Regex {
    Regex::new(regex_str).expect("Invalid date pattern")
}

/// Calendar formats tried in order; the first successful parse wins.
/// Day-first forms come before year-first, so ambiguous numeric dates
/// read day-first. chrono's %B also accepts abbreviated month names.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%Y/%m/%d",
    "%Y-%m-%d",
    "%Y.%m.%d",
    "%d %B %Y",
    "%B %d, %Y",
    "%d %B, %Y",
];

/// Scan one chunk for date mentions. Offsets are character positions
/// within the chunk. Overlapping matches from different patterns are
/// all reported; the nearest-date rule downstream tolerates duplicates.
pub fn detect_dates(text: &str) -> Vec<DateSpan> {
    let index = CharIndex::new(text);
    let mut dates = Vec::new();

    for regex in DATE_PATTERNS.iter() {
        for mat in regex.find_iter(text) {
            let raw = mat.as_str();
            dates.push(DateSpan {
                span: TextSpan {
                    text: raw.to_string(),
                    start: index.char_at(mat.start()),
                    end: index.char_at(mat.end()),
                    confidence: DATE_CONFIDENCE,
                },
                normalized: normalize_date(raw),
            });
        }
    }

    dates
}

/// Normalize a detected date string to ISO `YYYY-MM-DD`.
/// Returns None when no calendar format accepts it.
pub fn normalize_date(raw: &str) -> Option<String> {
    let cleaned = ORDINAL_SUFFIX.replace_all(raw.trim(), "$1");
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    None
}
