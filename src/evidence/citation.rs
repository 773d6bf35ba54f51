//! Citation strings for linked evidence.

use crate::models::EvidenceRecord;

/// Render the evidence behind one event as a citation line.
///
/// One bracketed entry per linked record, in link creation order,
/// joined with semicolons: `[Source: fir.pdf, Page 3] (Confidence: 80.0%)`.
pub fn render(records: &[EvidenceRecord]) -> String {
    if records.is_empty() {
        return "No evidence linked".to_string();
    }

    let citations: Vec<String> = records
        .iter()
        .map(|record| {
            let mut citation = format!("[Source: {}", record.filename);
            if let Some(page) = record.page_number {
                citation.push_str(&format!(", Page {page}"));
            }
            citation.push_str(&format!("] (Confidence: {:.1}%)", record.confidence * 100.0));
            citation
        })
        .collect();

    citations.join("; ")
}
