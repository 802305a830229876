//! Heading records produced by the extractor

use std::collections::HashMap;
use std::fmt;

/// A single heading found outside code blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRecord {
    /// Heading content with the `#` markers and one separating character removed
    pub text: String,

    /// Number of consecutive `#` characters opening the line (always ≥ 1)
    pub level: usize,
}

impl HeadingRecord {
    /// Create a new heading record
    pub fn new(text: impl Into<String>, level: usize) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

impl fmt::Display for HeadingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", "#".repeat(self.level), self.text)
    }
}

/// How repeated heading texts are stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// One entry per distinct text: first position kept, last level wins
    #[default]
    Collapse,
    /// Every occurrence is recorded in document order
    Keep,
}

/// Ordered sequence of heading records, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headings {
    records: Vec<HeadingRecord>,
    /// Text -> position of its first record
    index: HashMap<String, usize>,
    policy: DuplicatePolicy,
}

impl Headings {
    /// Create an empty collection with the given duplicate policy
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            policy,
        }
    }

    /// Record a heading according to the duplicate policy.
    ///
    /// Under [`DuplicatePolicy::Collapse`] an existing entry with the same
    /// text has its level overwritten in place; its position is unchanged.
    pub fn insert(&mut self, text: String, level: usize) {
        if self.policy == DuplicatePolicy::Collapse
            && let Some(&pos) = self.index.get(&text)
        {
            self.records[pos].level = level;
            return;
        }
        self.index.entry(text.clone()).or_insert(self.records.len());
        self.records.push(HeadingRecord { text, level });
    }

    /// Level recorded for `text`, if present
    pub fn get(&self, text: &str) -> Option<usize> {
        self.index.get(text).map(|&pos| self.records[pos].level)
    }

    /// Whether a heading with this text was recorded
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, HeadingRecord> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no headings were recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The duplicate policy in effect
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// `(text, level)` pairs in insertion order
    pub fn to_pairs(&self) -> Vec<(&str, usize)> {
        self.records
            .iter()
            .map(|r| (r.text.as_str(), r.level))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Headings {
    type Item = &'a HeadingRecord;
    type IntoIter = std::slice::Iter<'a, HeadingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<(String, usize)> for Headings {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        let mut headings = Headings::default();
        for (text, level) in iter {
            headings.insert(text, level);
        }
        headings
    }
}
