// All LLM prompt constants for the occupation-resolution pipeline.
// One fixed system instruction per stage; the user payload carries the data.

/// Stage 1: pull the occupation phrase out of a raw survey response.
pub const EXTRACT_OCCUPATION_SYSTEM: &str =
    "You are a helpful research assistant. Your task is to extract the \
    occupation(s) from the provided survey response. If you are uncertain, \
    make a guess.";

/// Stage 2: advisory 2-digit major-group guess. Retained in the output for
/// analysis; never used to filter candidates.
pub const ESTIMATE_MAJOR_GROUP_SYSTEM: &str =
    "You are a helpful research assistant. Your task is to estimate the \
    major-group SOC code as per the BLS definition for the provided \
    occupation. If you are uncertain, make a guess.";

/// Stage 4: pick one title from the candidate list.
pub const SELECT_TITLE_SYSTEM: &str =
    "You are a helpful research assistant. Your task is to select the most \
    likely Standard Occupational Classification (SOC) title for the provided \
    job title from the given list. Respond with the chosen title exactly as \
    written in the list. If you are uncertain, make a guess.";
