//! Occupation resolution — the four-stage pipeline for a single survey response.
//!
//! Flow: extract occupation → estimate major group (advisory) → taxonomy
//! keyword search → LLM selection → exact-title lookup back into the
//! candidate set. Strictly sequential; the first failure aborts resolution
//! for that response only, never for the run.

pub mod prompts;

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::PipelineError;
use crate::llm_client::{CompletionOracle, OracleError};
use crate::models::{CandidateSet, ResolvedRecord};
use crate::resolver::prompts::{
    ESTIMATE_MAJOR_GROUP_SYSTEM, EXTRACT_OCCUPATION_SYSTEM, SELECT_TITLE_SYSTEM,
};
use crate::taxonomy::{ServiceError, TaxonomySearch};

/// How many candidates to request from the taxonomy search per response.
const RESULT_LIMIT: u32 = 5;

pub struct OccupationResolver {
    oracle: Arc<dyn CompletionOracle>,
    taxonomy: Arc<dyn TaxonomySearch>,
}

impl OccupationResolver {
    pub fn new(oracle: Arc<dyn CompletionOracle>, taxonomy: Arc<dyn TaxonomySearch>) -> Self {
        Self { oracle, taxonomy }
    }

    /// Asks the oracle which occupation a raw survey response names. The
    /// completion is returned verbatim — untrimmed, unvalidated, and the
    /// oracle may well be guessing.
    pub async fn extract_occupation(&self, response_text: &str) -> Result<String, OracleError> {
        self.oracle
            .complete(EXTRACT_OCCUPATION_SYSTEM, response_text)
            .await
    }

    /// Advisory 2-digit major-group guess, kept for the output table.
    pub async fn estimate_broad_group(&self, occupation: &str) -> Result<String, OracleError> {
        self.oracle
            .complete(ESTIMATE_MAJOR_GROUP_SYSTEM, occupation)
            .await
    }

    /// Ranked candidate classifications for an extracted occupation.
    /// `ServiceError`s propagate unchanged.
    pub async fn query_candidates(&self, occupation: &str) -> Result<CandidateSet, ServiceError> {
        self.taxonomy.search(occupation, RESULT_LIMIT).await
    }

    /// Asks the oracle to pick the most likely title from the candidate list.
    pub async fn select_best(
        &self,
        occupation: &str,
        titles: &[&str],
    ) -> Result<String, OracleError> {
        let user = format!(
            "Job title: {occupation}\nCandidate titles: {}",
            titles.join(", ")
        );
        self.oracle.complete(SELECT_TITLE_SYSTEM, &user).await
    }

    /// Runs the full pipeline for one survey response.
    pub async fn resolve(&self, response_text: &str) -> Result<ResolvedRecord, PipelineError> {
        let extracted = self.extract_occupation(response_text).await?;
        debug!("extracted occupation: {extracted:?}");

        let group_guess = self.estimate_broad_group(&extracted).await?;
        debug!("estimated major group: {group_guess:?}");

        let candidates = self.query_candidates(&extracted).await?;
        if candidates.is_empty() {
            return Err(PipelineError::NoCandidates { keyword: extracted });
        }

        let selected = self.select_best(&extracted, &candidates.titles()).await?;

        // The oracle's choice is free text; it may drift from every candidate
        // title, which fails this record rather than the run. Duplicate titles
        // resolve to the first, highest-relevance entry.
        let entry = match candidates.find_by_title(&selected) {
            Some(entry) => entry.clone(),
            None => return Err(PipelineError::SelectionMismatch { selected }),
        };

        info!("resolved to {} ({})", entry.code, entry.title);

        Ok(ResolvedRecord {
            original_response: response_text.to_string(),
            extracted_occupation: extracted,
            estimated_group_guess: group_guess,
            selected_candidate: entry,
        })
    }
}
