#![allow(dead_code)]

//! Candidate occupation classifications returned by the taxonomy search.

use serde::{Deserialize, Serialize};

/// Leading code characters that identify the SOC major group.
const MAJOR_GROUP_LEN: usize = 2;

/// One taxonomy search result. `major_group` is derived from `code` at
/// construction and stays consistent with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub relevance_score: f64,
    pub code: String,
    pub title: String,
    pub major_group: String,
}

impl CandidateEntry {
    pub fn new(relevance_score: f64, code: impl Into<String>, title: impl Into<String>) -> Self {
        let code = code.into();
        let major_group = code.chars().take(MAJOR_GROUP_LEN).collect();
        Self {
            relevance_score,
            code,
            title: title.into(),
            major_group,
        }
    }
}

/// An ordered set of candidates, kept exactly in the order the service
/// returned them (descending relevance). Order is the tie-break: on duplicate
/// titles the first, i.e. highest-relevance, entry wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    entries: Vec<CandidateEntry>,
}

impl CandidateSet {
    pub fn new(entries: Vec<CandidateEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CandidateEntry] {
        &self.entries
    }

    /// Candidate titles in service order, for the selection prompt.
    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }

    /// Exact-match lookup; returns the first entry carrying this title.
    pub fn find_by_title(&self, title: &str) -> Option<&CandidateEntry> {
        self.entries.iter().find(|e| e.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_group_is_first_two_code_chars() {
        let entry = CandidateEntry::new(0.9, "49-3023", "Automotive Service Technicians");
        assert_eq!(entry.major_group, "49");
    }

    #[test]
    fn test_major_group_of_short_code_is_whole_code() {
        let entry = CandidateEntry::new(0.1, "7", "Oddity");
        assert_eq!(entry.major_group, "7");
    }

    #[test]
    fn test_titles_preserve_service_order() {
        let set = CandidateSet::new(vec![
            CandidateEntry::new(0.9, "29-1141", "Registered Nurses"),
            CandidateEntry::new(0.5, "29-2061", "Licensed Practical Nurses"),
        ]);
        assert_eq!(
            set.titles(),
            vec!["Registered Nurses", "Licensed Practical Nurses"]
        );
    }

    #[test]
    fn test_find_by_title_is_exact() {
        let set = CandidateSet::new(vec![CandidateEntry::new(0.9, "29-1141", "Registered Nurses")]);
        assert!(set.find_by_title("Registered Nurses").is_some());
        assert!(set.find_by_title("registered nurses").is_none());
        assert!(set.find_by_title("Registered Nurses ").is_none());
    }

    #[test]
    fn test_find_by_title_duplicate_titles_return_first() {
        let set = CandidateSet::new(vec![
            CandidateEntry::new(0.9, "15-1252", "Software Developers"),
            CandidateEntry::new(0.4, "15-1299", "Software Developers"),
        ]);
        let found = set.find_by_title("Software Developers").unwrap();
        assert_eq!(found.code, "15-1252");
    }
}
