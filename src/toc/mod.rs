//! TOC core: heading extraction, slugs and rendering
//!
//! Everything here is pure: text in, text out, no I/O and no shared state,
//! so calls may run concurrently on independent inputs.

mod extract;
mod render;
mod slug;

pub use extract::{extract, extract_with};
pub use render::{DEFAULT_HEADER, DEFAULT_INDENT_WIDTH, RenderOptions, render, render_with};
pub use slug::slugify;

use crate::config::Config;

/// Extract and render a TOC for `markdown` using the settings in `config`.
pub fn generate_toc(markdown: &str, config: &Config) -> String {
    let headings = extract_with(markdown, config.duplicates);
    render_with(&headings, &config.render_options())
}
