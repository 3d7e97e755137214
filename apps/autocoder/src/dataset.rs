//! Tabular input/output: survey responses in, resolved records out.

use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;

use crate::models::{ResolvedRecord, SurveyResponse};

const OUTPUT_HEADER: [&str; 5] = [
    "original_response",
    "extracted_occupation",
    "estimated_group_guess",
    "selected_code",
    "selected_title",
];

/// Reads survey responses from the first column of a headered CSV file.
/// An unreadable file is fatal; no record has been processed yet.
pub fn read_responses(path: &Path) -> Result<Vec<SurveyResponse>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;

    let mut responses = Vec::new();
    for result in reader.records() {
        let record = result.with_context(|| format!("Malformed row in {}", path.display()))?;
        if let Some(field) = record.get(0) {
            responses.push(SurveyResponse::new(field));
        }
    }
    Ok(responses)
}

/// Selects a uniform random subset of `n` responses; `n == 0` means use all
/// rows, and asking for more rows than exist degrades to the full set.
pub fn sample_responses(responses: Vec<SurveyResponse>, n: usize) -> Vec<SurveyResponse> {
    if n == 0 || n >= responses.len() {
        return responses;
    }
    let mut rng = rand::thread_rng();
    responses.choose_multiple(&mut rng, n).cloned().collect()
}

/// Writes the output table once, one flattened row per resolved record, in
/// processing order.
pub fn write_records(path: &Path, records: &[ResolvedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    writer.write_record(OUTPUT_HEADER)?;
    for record in records {
        writer.write_record([
            record.original_response.as_str(),
            record.extracted_occupation.as_str(),
            record.estimated_group_guess.as_str(),
            record.selected_candidate.code.as_str(),
            record.selected_candidate.title.as_str(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush output file {}", path.display()))?;
    Ok(())
}
