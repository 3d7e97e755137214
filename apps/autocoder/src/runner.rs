//! Sequential orchestration across the whole input table.
//!
//! One response is fully resolved (or has failed) before the next begins.
//! Per-record failures are recorded and logged, never fatal to the run.

use std::time::Duration;

use tracing::{info, warn};

use crate::errors::PipelineError;
use crate::models::{ResolvedRecord, SurveyResponse};
use crate::resolver::OccupationResolver;

/// One response the pipeline could not resolve, with the reason.
#[derive(Debug)]
pub struct RunFailure {
    pub original_response: String,
    pub error: PipelineError,
}

/// Outcome of a full run: resolved records in input processing order plus
/// the failure list.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub resolved: Vec<ResolvedRecord>,
    pub failures: Vec<RunFailure>,
}

/// Resolves every response in order, pausing `delay` between records. The
/// delay is a deliberate throttle for external rate limits, not an
/// optimization; it is skipped after the final record.
pub async fn process_responses(
    resolver: &OccupationResolver,
    responses: &[SurveyResponse],
    delay: Duration,
) -> RunSummary {
    let total = responses.len();
    let mut summary = RunSummary::default();

    for (i, response) in responses.iter().enumerate() {
        info!("processing survey response {} of {total}", i + 1);

        match resolver.resolve(response.as_str()).await {
            Ok(record) => summary.resolved.push(record),
            Err(error) => {
                warn!(
                    "response {:?} failed ({}): {error}",
                    preview(response.as_str(), 60),
                    error.kind()
                );
                summary.failures.push(RunFailure {
                    original_response: response.as_str().to_string(),
                    error,
                });
            }
        }

        if i + 1 < total && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    summary
}

/// Shortens a response for log lines.
fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::llm_client::{CompletionOracle, OracleError};
    use crate::models::{CandidateEntry, CandidateSet};
    use crate::taxonomy::{ServiceError, TaxonomySearch};

    struct ScriptedOracle {
        replies: Mutex<VecDeque<String>>,
    }

    impl ScriptedOracle {
        fn new(replies: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.iter().map(|s| s.to_string()).collect()),
            })
        }
    }

    #[async_trait]
    impl CompletionOracle for ScriptedOracle {
        async fn complete(&self, _system: &str, _user: &str) -> Result<String, OracleError> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(OracleError::EmptyContent)
        }
    }

    struct FixedTaxonomy {
        set: CandidateSet,
    }

    #[async_trait]
    impl TaxonomySearch for FixedTaxonomy {
        async fn search(&self, _keyword: &str, _limit: u32) -> Result<CandidateSet, ServiceError> {
            Ok(self.set.clone())
        }
    }

    #[tokio::test]
    async fn test_run_continues_past_failed_records() {
        let set = CandidateSet::new(vec![CandidateEntry::new(
            0.9,
            "49-3023",
            "Automotive Service Technicians",
        )]);
        // First record's selection drifts from the candidate title; the
        // second record resolves cleanly.
        let oracle = ScriptedOracle::new(&[
            "Automotive Mechanic",
            "49",
            "Auto Mechanic",
            "Automotive Mechanic",
            "49",
            "Automotive Service Technicians",
        ]);
        let resolver =
            OccupationResolver::new(oracle, Arc::new(FixedTaxonomy { set }));

        let responses = vec![
            SurveyResponse::new("I fix cars for a living"),
            SurveyResponse::new("I repair automobiles"),
        ];
        let summary = process_responses(&resolver, &responses, Duration::ZERO).await;

        assert_eq!(summary.resolved.len(), 1);
        assert_eq!(summary.resolved[0].original_response, "I repair automobiles");
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].original_response, "I fix cars for a living");
        assert_eq!(summary.failures[0].error.kind(), "selection_mismatch");
    }

    #[tokio::test]
    async fn test_run_over_empty_input_is_empty_summary() {
        let oracle = ScriptedOracle::new(&[]);
        let resolver = OccupationResolver::new(
            oracle,
            Arc::new(FixedTaxonomy {
                set: CandidateSet::default(),
            }),
        );

        let summary = process_responses(&resolver, &[], Duration::ZERO).await;
        assert!(summary.resolved.is_empty());
        assert!(summary.failures.is_empty());
    }

    #[test]
    fn test_preview_truncates_long_text() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("a very long survey response", 6), "a very…");
    }
}
