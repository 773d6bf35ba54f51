use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(EventType {
    FirFiled => "FIR_FILED",
    Arrest => "ARREST",
    ChargesFiled => "CHARGES_FILED",
    BailApplication => "BAIL_APPLICATION",
    HearingScheduled => "HEARING_SCHEDULED",
    Judgment => "JUDGMENT",
    AppealFiled => "APPEAL_FILED",
    SuitFiled => "SUIT_FILED",
    AgreementSigned => "AGREEMENT_SIGNED",
    NoticeServed => "NOTICE_SERVED",
    LicenseAction => "LICENSE_ACTION",
    InvestigationStarted => "INVESTIGATION_STARTED",
    IpcSection => "IPC_SECTION",
    ConstitutionalArticle => "CONSTITUTIONAL_ARTICLE",
});

str_enum!(EntityLabel {
    Person => "PERSON",
    Organization => "ORGANIZATION",
    Location => "LOCATION",
    Law => "LAW",
    Money => "MONEY",
    Date => "DATE",
});

impl EntityLabel {
    /// Labels that get attached to timeline events. Other labels stay in the
    /// raw span stream for callers that want them.
    pub fn is_relevant(&self) -> bool {
        matches!(self, Self::Person | Self::Organization | Self::Location)
    }
}

str_enum!(DocumentType {
    Pdf => "PDF Document",
    Image => "Image/Screenshot",
    Email => "Email",
    Text => "Text Document",
});

impl DocumentType {
    /// Map a lowercase file extension (no dot) to its document type.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(Self::Pdf),
            "png" | "jpg" | "jpeg" | "tiff" | "bmp" => Some(Self::Image),
            "eml" | "msg" => Some(Self::Email),
            "txt" | "docx" | "rtf" => Some(Self::Text),
            _ => None,
        }
    }
}

str_enum!(RecognizerKind {
    Model => "model",
    Lexicon => "lexicon",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn event_type_round_trip() {
        for (variant, s) in [
            (EventType::FirFiled, "FIR_FILED"),
            (EventType::Arrest, "ARREST"),
            (EventType::ChargesFiled, "CHARGES_FILED"),
            (EventType::BailApplication, "BAIL_APPLICATION"),
            (EventType::HearingScheduled, "HEARING_SCHEDULED"),
            (EventType::Judgment, "JUDGMENT"),
            (EventType::AppealFiled, "APPEAL_FILED"),
            (EventType::SuitFiled, "SUIT_FILED"),
            (EventType::AgreementSigned, "AGREEMENT_SIGNED"),
            (EventType::NoticeServed, "NOTICE_SERVED"),
            (EventType::LicenseAction, "LICENSE_ACTION"),
            (EventType::InvestigationStarted, "INVESTIGATION_STARTED"),
            (EventType::IpcSection, "IPC_SECTION"),
            (EventType::ConstitutionalArticle, "CONSTITUTIONAL_ARTICLE"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(EventType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn entity_label_round_trip() {
        for (variant, s) in [
            (EntityLabel::Person, "PERSON"),
            (EntityLabel::Organization, "ORGANIZATION"),
            (EntityLabel::Location, "LOCATION"),
            (EntityLabel::Law, "LAW"),
            (EntityLabel::Money, "MONEY"),
            (EntityLabel::Date, "DATE"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(EntityLabel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn relevant_labels_are_person_org_location() {
        assert!(EntityLabel::Person.is_relevant());
        assert!(EntityLabel::Organization.is_relevant());
        assert!(EntityLabel::Location.is_relevant());
        assert!(!EntityLabel::Law.is_relevant());
        assert!(!EntityLabel::Money.is_relevant());
        assert!(!EntityLabel::Date.is_relevant());
    }

    #[test]
    fn document_type_from_extension() {
        assert_eq!(DocumentType::from_extension("pdf"), Some(DocumentType::Pdf));
        assert_eq!(DocumentType::from_extension("jpeg"), Some(DocumentType::Image));
        assert_eq!(DocumentType::from_extension("bmp"), Some(DocumentType::Image));
        assert_eq!(DocumentType::from_extension("eml"), Some(DocumentType::Email));
        assert_eq!(DocumentType::from_extension("msg"), Some(DocumentType::Email));
        assert_eq!(DocumentType::from_extension("docx"), Some(DocumentType::Text));
        assert_eq!(DocumentType::from_extension("exe"), None);
        assert_eq!(DocumentType::from_extension(""), None);
    }

    #[test]
    fn recognizer_kind_round_trip() {
        for (variant, s) in [
            (RecognizerKind::Model, "model"),
            (RecognizerKind::Lexicon, "lexicon"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(RecognizerKind::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(EventType::from_str("invalid").is_err());
        assert!(EntityLabel::from_str("unknown").is_err());
        assert!(DocumentType::from_str("").is_err());
    }
}
