//! File expansion and ignore-pattern filtering

/// A path to process, and whether it came from walking a directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct ExpandedPath {
    pub(crate) path: String,
    pub(crate) discovered: bool,
}

/// Expand directories to .md files recursively; explicit paths pass through
pub(crate) fn expand_paths(paths: &[String]) -> Vec<ExpandedPath> {
    use walkdir::WalkDir;

    let mut expanded = Vec::new();
    for path in paths {
        let p = std::path::Path::new(path);
        if p.is_dir() {
            for entry in WalkDir::new(p).into_iter().filter_map(|e| e.ok()) {
                let ep = entry.path();
                if ep.is_file() && mdtoc::helpers::is_markdown_path(ep) {
                    expanded.push(ExpandedPath {
                        path: ep.to_string_lossy().to_string(),
                        discovered: true,
                    });
                }
            }
        } else {
            expanded.push(ExpandedPath {
                path: path.clone(),
                discovered: false,
            });
        }
    }
    expanded.sort();
    // An explicitly named path wins over the same path found in a directory
    expanded.dedup_by(|later, earlier| later.path == earlier.path);
    expanded
}

/// Drop directory-discovered files that have no marker line.
///
/// Explicitly named files are always kept so a missing marker is reported.
pub(crate) fn skip_unmarked(files: Vec<ExpandedPath>, marker: &str) -> Vec<ExpandedPath> {
    files
        .into_iter()
        .filter(|f| {
            if !f.discovered {
                return true;
            }
            match std::fs::read_to_string(&f.path) {
                Ok(content) if mdtoc::has_marker(&content, marker) => true,
                Ok(_) => {
                    log::info!("skipping {}: no '{}' line", f.path, marker);
                    false
                }
                // Keep it so the read failure is reported
                Err(_) => true,
            }
        })
        .collect()
}

/// Filter files by ignore glob patterns
pub(crate) fn filter_ignored(
    files: Vec<ExpandedPath>,
    ignore_patterns: &[String],
) -> Result<Vec<ExpandedPath>, globset::Error> {
    if ignore_patterns.is_empty() {
        return Ok(files);
    }

    use globset::{Glob, GlobSetBuilder};

    let mut builder = GlobSetBuilder::new();
    for pattern in ignore_patterns {
        builder.add(Glob::new(pattern)?);
    }
    let ignore_set = builder.build()?;

    Ok(files
        .into_iter()
        .filter(|f| !ignore_set.is_match(&f.path))
        .collect())
}
