//! Legal event pattern matching.

use std::sync::LazyLock;

use regex::Regex;

use super::offsets::CharIndex;
use crate::models::enums::EventType;
use crate::models::EventCandidate;

/// Base confidence for pattern-matched events.
pub const PATTERN_CONFIDENCE: f32 = 0.7;

/// A compiled event pattern with its classification.
struct EventRule {
    regex: Regex,
    event_type: EventType,
    description: &'static str,
}

/// Legal event patterns covering criminal, civil, and administrative matters.
static EVENT_RULES: LazyLock<Vec<EventRule>> = LazyLock::new(|| {
    vec![
        // Criminal law
        rule(
            r"(?is)(?:FIR|First Information Report).*?(?:filed|registered|lodged)",
            EventType::FirFiled,
            "FIR Filed",
        ),
        rule(
            r"(?is)(?:arrest|arrested|apprehended).*?(?:accused|suspect|defendant)",
            EventType::Arrest,
            "Arrest Made",
        ),
        rule(
            r"(?is)(?:charge|charged|chargesheet).*?(?:filed|submitted)",
            EventType::ChargesFiled,
            "Charges Filed",
        ),
        rule(
            r"(?is)(?:bail|anticipatory bail).*?(?:granted|rejected|applied)",
            EventType::BailApplication,
            "Bail Application",
        ),
        // Court proceedings
        rule(
            r"(?is)(?:hearing|proceeding|case).*?(?:scheduled|adjourned|postponed)",
            EventType::HearingScheduled,
            "Court Hearing",
        ),
        rule(
            r"(?is)(?:judgment|order|verdict).*?(?:pronounced|delivered|passed)",
            EventType::Judgment,
            "Judgment Delivered",
        ),
        rule(
            r"(?is)(?:appeal|revision|writ).*?(?:filed|submitted|dismissed)",
            EventType::AppealFiled,
            "Appeal Filed",
        ),
        // Civil law
        rule(
            r"(?is)(?:suit|petition|complaint).*?(?:filed|instituted|lodged)",
            EventType::SuitFiled,
            "Legal Suit Filed",
        ),
        rule(
            r"(?is)(?:agreement|contract|deed).*?(?:executed|signed|entered)",
            EventType::AgreementSigned,
            "Agreement Executed",
        ),
        rule(
            r"(?is)(?:notice|summons).*?(?:served|issued|delivered)",
            EventType::NoticeServed,
            "Legal Notice Served",
        ),
        // Administrative actions
        rule(
            r"(?is)(?:license|permit|approval).*?(?:granted|issued|revoked)",
            EventType::LicenseAction,
            "License/Permit Action",
        ),
        rule(
            r"(?is)(?:investigation|inquiry|probe).*?(?:initiated|commenced|started)",
            EventType::InvestigationStarted,
            "Investigation Initiated",
        ),
        // Statutory references
        rule(
            r"(?is)(?:Section|Sec\.?)\s*\d+.*?(?:IPC|Indian Penal Code)",
            EventType::IpcSection,
            "IPC Section Applied",
        ),
        rule(
            r"(?is)(?:Article|Art\.?)\s*\d+.*?(?:Constitution|constitutional)",
            EventType::ConstitutionalArticle,
            "Constitutional Article",
        ),
    ]
});

fn rule(regex_str: &str, event_type: EventType, description: &'static str) -> EventRule {
    EventRule {
        regex: Regex::new(regex_str).expect("Invalid event pattern"),
        event_type,
        description,
    }
}

/// Scan one chunk for legal event mentions, attaching a context window
/// of `context_radius_chars` on each side of the match. Offsets are
/// character positions within the chunk.
pub fn scan_events(text: &str, context_radius_chars: usize) -> Vec<EventCandidate> {
    let index = CharIndex::new(text);
    let mut candidates = Vec::new();

    for rule in EVENT_RULES.iter() {
        for mat in rule.regex.find_iter(text) {
            let start = index.char_at(mat.start());
            let end = index.char_at(mat.end());
            let context_start = start.saturating_sub(context_radius_chars);
            let context_end = (end + context_radius_chars).min(index.char_len());
            let context =
                text[index.byte_of(context_start)..index.byte_of(context_end)].to_string();

            candidates.push(EventCandidate {
                text: mat.as_str().to_string(),
                context,
                event_type: rule.event_type.clone(),
                description: rule.description.to_string(),
                start,
                end,
                confidence: PATTERN_CONFIDENCE,
            });
        }
    }

    candidates
}
