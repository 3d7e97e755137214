pub mod occupation;
pub mod record;

pub use occupation::{CandidateEntry, CandidateSet};
pub use record::{ResolvedRecord, SurveyResponse};
