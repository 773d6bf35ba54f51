pub mod enums;
pub mod event;
pub mod evidence;
pub mod span;

pub use event::{DocumentMetadata, TimelineEvent, UNKNOWN_DATE};
pub use evidence::{EvidenceFile, EvidenceLink, EvidenceRecord};
pub use span::{DateSpan, EntitySpan, EventCandidate, TextSpan};
