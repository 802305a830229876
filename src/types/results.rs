//! Generation results types

use crate::types::TocError;
use std::collections::BTreeMap;
use std::fmt;

/// Outcome of one successful job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocOutcome {
    /// Destination path that received (or would receive) the TOC
    pub dest: String,

    /// Number of TOC entries rendered
    pub entries: usize,

    /// Full destination content after splicing
    pub content: String,

    /// Whether the destination was written
    pub written: bool,
}

/// Results from a generation run, keyed by destination path
#[derive(Debug, Default)]
pub struct TocResults {
    /// Map of destination path to job outcome
    pub results: BTreeMap<String, Result<TocOutcome, TocError>>,
}

impl TocResults {
    /// Create a new empty TocResults
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of a job
    pub fn add(&mut self, dest: String, outcome: Result<TocOutcome, TocError>) {
        self.results.insert(dest, outcome);
    }

    /// Outcome for a specific destination
    pub fn get(&self, dest: &str) -> Option<&Result<TocOutcome, TocError>> {
        self.results.get(dest)
    }

    /// Successful outcomes
    pub fn successes(&self) -> impl Iterator<Item = &TocOutcome> {
        self.results.values().filter_map(|r| r.as_ref().ok())
    }

    /// Failed jobs with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&str, &TocError)> {
        self.results
            .iter()
            .filter_map(|(dest, r)| r.as_ref().err().map(|e| (dest.as_str(), e)))
    }

    /// Number of failed jobs
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Whether any job failed
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Whether no jobs ran
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl fmt::Display for TocResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dest, result) in &self.results {
            match result {
                Ok(outcome) => writeln!(f, "{}: {} entries", dest, outcome.entries)?,
                Err(e) => writeln!(f, "{}: {}", dest, e)?,
            }
        }
        Ok(())
    }
}
