//! Input and output row types for one pipeline run.

use serde::Serialize;

use crate::models::occupation::CandidateEntry;

/// One raw survey response, exactly as read from the input table.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyResponse(String);

impl SurveyResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of a successful resolution, one per survey response. Immutable
/// once created; appended to the output table in processing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRecord {
    pub original_response: String,
    pub extracted_occupation: String,
    pub estimated_group_guess: String,
    pub selected_candidate: CandidateEntry,
}
