//! # mdtoc
//!
//! Generate a linked Table of Contents for a Markdown document and insert it
//! into a file at a marker line.
//!
//! ## Features
//!
//! - **Heading extraction** that ignores fenced code blocks, the document
//!   title and any existing "Table of Contents" heading
//! - **Nested rendering** with indentation relative to the previous heading
//! - **Anchor slugs** compatible with the generated `[Heading](#slug)` links
//! - **Marker insertion** with atomic file replacement
//! - **Configuration** via JSON, YAML, or TOML files
//! - **Batch runs** in parallel with rayon, or async with tokio
//!
//! ## Quick Start
//!
//! ```rust
//! use mdtoc::{extract, render};
//!
//! let markdown = "# Title\n## Setup\n### Install\n## Usage\n";
//! let toc = render(&extract(markdown));
//! assert_eq!(
//!     toc,
//!     "### Table of Contents\n- [Setup](#setup)\n    - [Install](#install)\n- [Usage](#usage)\n"
//! );
//! ```
//!
//! ### Files
//!
//! ```rust,no_run
//! use mdtoc::{TocJob, TocOptions, generate_sync};
//!
//! let options = TocOptions::new().with_job(TocJob::new("docs/guide.md", "README.md"));
//! let results = generate_sync(&options)?;
//! print!("{}", results);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The destination must contain a line that is exactly `**MD-TOC**`; that
//! line is replaced by the rendered TOC.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod generate;
pub mod helpers;
pub mod insert;
pub mod toc;
pub mod types;

// Re-export main types and functions
pub use config::Config;
pub use generate::generate_sync;
pub use insert::{DEFAULT_MARKER, has_marker, insert_toc, write_toc};
pub use toc::{RenderOptions, extract, extract_with, generate_toc, render, render_with, slugify};
pub use types::{
    DuplicatePolicy, HeadingRecord, Headings, Result, TocError, TocJob, TocOptions, TocOutcome,
    TocResults,
};

#[cfg(feature = "async")]
pub use generate::generate_async;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version
pub fn version() -> &'static str {
    VERSION
}
