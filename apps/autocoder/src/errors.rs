use thiserror::Error;

use crate::llm_client::OracleError;
use crate::taxonomy::ServiceError;

/// Per-record pipeline failure. None of these abort the run — the runner
/// records the offending response and moves to the next one. Only
/// configuration and input errors are fatal, and those surface as `anyhow`
/// errors before any record is processed.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("oracle call failed: {0}")]
    Oracle(#[from] OracleError),

    #[error("taxonomy search failed: {0}")]
    Taxonomy(#[from] ServiceError),

    #[error("taxonomy search for {keyword:?} returned no candidates")]
    NoCandidates { keyword: String },

    #[error("selected title {selected:?} does not match any candidate title")]
    SelectionMismatch { selected: String },
}

impl PipelineError {
    /// Stable short label for log lines and failure summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Oracle(_) => "oracle",
            PipelineError::Taxonomy(_) => "taxonomy",
            PipelineError::NoCandidates { .. } => "no_candidates",
            PipelineError::SelectionMismatch { .. } => "selection_mismatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_are_stable() {
        let mismatch = PipelineError::SelectionMismatch {
            selected: "Auto Mechanic".to_string(),
        };
        assert_eq!(mismatch.kind(), "selection_mismatch");

        let empty = PipelineError::NoCandidates {
            keyword: "plumber".to_string(),
        };
        assert_eq!(empty.kind(), "no_candidates");
    }

    #[test]
    fn test_selection_mismatch_display_names_the_title() {
        let err = PipelineError::SelectionMismatch {
            selected: "Auto Mechanic".to_string(),
        };
        assert!(err.to_string().contains("Auto Mechanic"));
    }
}
