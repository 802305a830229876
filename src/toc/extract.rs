//! Heading extraction: scan markdown lines and collect heading records

use crate::helpers::{heading_level, is_code_fence};
use crate::types::{DuplicatePolicy, Headings};

/// Heading text containing this phrase (case-insensitive) is never listed
const TOC_PHRASE: &str = "table of contents";

/// Extract headings with the default [`DuplicatePolicy::Collapse`].
///
/// # Examples
/// ```
/// let headings = mdtoc::extract("# Title\n## Setup\n### Install\n## Usage\n");
/// assert_eq!(headings.to_pairs(), vec![("Setup", 2), ("Install", 3), ("Usage", 2)]);
/// ```
pub fn extract(markdown: &str) -> Headings {
    extract_with(markdown, DuplicatePolicy::default())
}

/// Extract headings, storing repeated texts according to `policy`.
///
/// The first heading of the document is treated as its title and skipped,
/// as is any heading mentioning "table of contents". Lines between backtick
/// fences are ignored; an unterminated fence suppresses everything after it.
pub fn extract_with(markdown: &str, policy: DuplicatePolicy) -> Headings {
    let mut headings = Headings::new(policy);
    let mut in_code_block = false;
    let mut first_heading_seen = false;

    for line in markdown.lines() {
        if is_code_fence(line) {
            in_code_block = !in_code_block;
        }
        if in_code_block || !line.starts_with('#') {
            continue;
        }
        if !first_heading_seen {
            first_heading_seen = true;
            continue;
        }

        let level = heading_level(line);
        let text = strip_marker(line, level);
        if is_toc_heading(text) {
            continue;
        }
        headings.insert(text.to_string(), level);
    }

    log::debug!("extracted {} heading(s)", headings.len());
    headings
}

/// Drop the `level` markers plus the one character after them
fn strip_marker(line: &str, level: usize) -> &str {
    match line.char_indices().nth(level + 1) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

fn is_toc_heading(text: &str) -> bool {
    text.to_lowercase().contains(TOC_PHRASE)
}
