//! Configuration parsing and management

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::insert::DEFAULT_MARKER;
use crate::toc::{DEFAULT_HEADER, DEFAULT_INDENT_WIDTH, RenderOptions};
use crate::types::{DuplicatePolicy, Result, TocError};

/// Configuration for mdtoc
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Line in the destination that is replaced by the TOC
    pub marker: String,

    /// Header line emitted above the TOC entries
    pub header: String,

    /// Spaces per nesting step
    pub indent_width: usize,

    /// How repeated heading texts are listed
    pub duplicates: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            header: DEFAULT_HEADER.to_string(),
            indent_width: DEFAULT_INDENT_WIDTH,
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl Config {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str());

        match ext {
            Some("json") => Self::from_json_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("toml") => Self::from_toml_file(path),
            _ => {
                // Try JSON first, then YAML, then TOML
                Self::from_json_file(path)
                    .or_else(|_| Self::from_yaml_file(path))
                    .or_else(|_| Self::from_toml_file(path))
            }
        }
    }

    /// Config file names to search for during auto-discovery
    pub const DISCOVERY_NAMES: [&'static str; 4] = [
        ".mdtoc.json",
        ".mdtoc.yaml",
        ".mdtoc.yml",
        ".mdtoc.toml",
    ];

    /// Walk up from `start_dir` looking for a config file
    pub fn discover(start_dir: impl AsRef<Path>) -> Option<Self> {
        let mut dir = start_dir.as_ref().to_path_buf();
        loop {
            for name in &Self::DISCOVERY_NAMES {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    match Self::from_file(&candidate) {
                        Ok(config) => {
                            log::debug!("using config {}", candidate.display());
                            return Some(config);
                        }
                        Err(e) => log::warn!("ignoring {}: {}", candidate.display(), e),
                    }
                }
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            return Err(TocError::InvalidConfig("marker must not be empty".to_string()));
        }
        if self.marker.contains('\n') {
            return Err(TocError::InvalidConfig(
                "marker must be a single line".to_string(),
            ));
        }
        if self.indent_width == 0 {
            return Err(TocError::InvalidConfig(
                "indent_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Renderer settings derived from this configuration
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            header: self.header.clone(),
            indent_width: self.indent_width,
        }
    }
}
