//! Marker insertion: splice a rendered TOC into a destination document

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::helpers::{detect_line_ending, is_markdown_path};
use crate::toc::{extract_with, render_with};
use crate::types::{Result, TocError, TocOutcome};

/// Line replaced by the TOC when no other marker is configured
pub const DEFAULT_MARKER: &str = "**MD-TOC**";

/// Replace the first line exactly equal to `marker` with the lines of `toc`.
///
/// The inserted lines take the marker line's terminator; all other lines,
/// including their line endings, are left exactly as they were.
///
/// # Examples
/// ```
/// let out = mdtoc::insert_toc("# Doc\n**MD-TOC**\nBody\n", "### TOC\n- [A](#a)\n", "**MD-TOC**").unwrap();
/// assert_eq!(out, "# Doc\n### TOC\n- [A](#a)\nBody\n");
/// ```
pub fn insert_toc(dest_content: &str, toc: &str, marker: &str) -> Result<String> {
    splice(dest_content, toc, marker).ok_or_else(|| TocError::MissingMarker {
        path: "-".to_string(),
        marker: marker.to_string(),
    })
}

/// Whether `content` has a line exactly equal to `marker`
pub fn has_marker(content: &str, marker: &str) -> bool {
    content.split_inclusive('\n').any(|line| split_line_ending(line).0 == marker)
}

/// Replace the marker line in place; every other byte of `dest_content` is kept
fn splice(dest_content: &str, toc: &str, marker: &str) -> Option<String> {
    let mut offset = 0;
    for line in dest_content.split_inclusive('\n') {
        let (body, ending) = split_line_ending(line);
        if body != marker {
            offset += line.len();
            continue;
        }

        // Inserted lines follow the marker line's own terminator
        let eol = if ending.is_empty() {
            detect_line_ending(dest_content)
        } else {
            ending
        };
        let toc_lines: Vec<&str> = toc.lines().collect();

        let mut spliced = String::with_capacity(dest_content.len() + toc.len());
        spliced.push_str(&dest_content[..offset]);
        spliced.push_str(&toc_lines.join(eol));
        spliced.push_str(ending);
        spliced.push_str(&dest_content[offset + line.len()..]);
        return Some(spliced);
    }
    None
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Generate a TOC from `source` and insert it into `dest` at the marker.
///
/// Both paths must end in `.md`. The destination is replaced atomically;
/// when the marker is missing nothing is written. With `dry_run` the
/// spliced content is returned without touching the destination.
pub fn write_toc(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    config: &Config,
    dry_run: bool,
) -> Result<TocOutcome> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    for path in [source, dest] {
        if !is_markdown_path(path) {
            return Err(TocError::InvalidExtension(path.display().to_string()));
        }
    }

    let markdown = std::fs::read_to_string(source)
        .map_err(|_| TocError::FileNotFound(source.display().to_string()))?;
    let headings = extract_with(&markdown, config.duplicates);
    let toc = render_with(&headings, &config.render_options());
    let entries = headings.len();

    let dest_content = if dest == source {
        markdown
    } else {
        std::fs::read_to_string(dest)
            .map_err(|_| TocError::FileNotFound(dest.display().to_string()))?
    };

    let content =
        splice(&dest_content, &toc, &config.marker).ok_or_else(|| TocError::MissingMarker {
            path: dest.display().to_string(),
            marker: config.marker.clone(),
        })?;

    if !dry_run {
        write_atomic(dest, &content)?;
        log::info!("wrote {} TOC entries to {}", entries, dest.display());
    }

    Ok(TocOutcome {
        dest: dest.display().to_string(),
        entries,
        content,
        written: !dry_run,
    })
}

/// Write through a temp file next to the resolved target, then rename over it.
///
/// Symlinks are followed so the link itself survives, and the target's
/// permissions are carried over to the replacement.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let resolved = std::fs::canonicalize(path)?;
    let dir = resolved.parent().unwrap_or_else(|| Path::new("."));
    let permissions = std::fs::metadata(&resolved)?.permissions();

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&resolved)?;
    Ok(())
}
