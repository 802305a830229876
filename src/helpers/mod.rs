//! Helper utilities

use std::path::Path;

/// Check if a line opens or closes a backtick code fence.
///
/// Only lines *starting* with three backticks count; indented fences and
/// `~~~` fences are treated as ordinary text.
#[inline]
pub fn is_code_fence(line: &str) -> bool {
    line.starts_with("```")
}

/// Detect line ending style
pub fn detect_line_ending(content: &str) -> &str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Check whether a path names a markdown file (`.md` suffix)
///
/// # Examples
/// ```
/// assert!(mdtoc::helpers::is_markdown_path("docs/README.md"));
/// assert!(!mdtoc::helpers::is_markdown_path("notes.txt"));
/// ```
pub fn is_markdown_path(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == "md")
}

/// Count the leading `#` characters of a line
#[inline]
pub fn heading_level(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'#').count()
}
