//! TOC rendering: turn heading records into an indented markdown link list

use super::slugify;
use crate::types::Headings;

/// Default header line emitted above the entries
pub const DEFAULT_HEADER: &str = "### Table of Contents";

/// Default number of spaces per nesting step
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Options controlling the rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Header line (without trailing newline)
    pub header: String,

    /// Spaces per nesting step
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Render headings with the default header and four-space indentation.
pub fn render(headings: &Headings) -> String {
    render_with(headings, &RenderOptions::default())
}

/// Render headings as a nested list of `- [Heading](#slug)` entries.
///
/// Nesting is relative: a deeper heading than the previous one indents by a
/// single step however many levels it skips, a shallower one dedents by the
/// level difference (never below zero), and a level-1 heading returns to the
/// left margin. The first entry always starts at the margin.
pub fn render_with(headings: &Headings, options: &RenderOptions) -> String {
    let mut toc = String::with_capacity(options.header.len() + 1 + headings.len() * 32);
    toc.push_str(&options.header);
    toc.push('\n');

    let mut curr_indent = 0usize;
    let mut prev_level: Option<usize> = None;

    for record in headings {
        curr_indent = next_indent(curr_indent, prev_level, record.level);
        toc.push_str(&" ".repeat(curr_indent * options.indent_width));
        toc.push_str(&format!("- [{}](#{})\n", record.text, slugify(&record.text)));
        prev_level = Some(record.level);
    }

    log::debug!("rendered {} TOC entries", headings.len());
    toc
}

fn next_indent(curr: usize, prev_level: Option<usize>, level: usize) -> usize {
    let Some(prev) = prev_level else {
        return 0;
    };
    if level == 1 {
        0
    } else if level > prev {
        curr + 1
    } else if level < prev {
        curr.saturating_sub(prev - level)
    } else {
        curr
    }
}
