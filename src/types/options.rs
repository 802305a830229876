//! Options for configuring TOC generation runs

use crate::config::Config;

/// A single source → destination pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocJob {
    /// Markdown file the headings are read from
    pub source: String,

    /// Markdown file the TOC is inserted into
    pub dest: String,
}

impl TocJob {
    /// Create a job reading `source` and writing into `dest`
    pub fn new(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }

    /// A job whose source is also its destination
    pub fn in_place(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            source: path.clone(),
            dest: path,
        }
    }
}

/// Options for a generation run
#[derive(Debug, Clone, Default)]
pub struct TocOptions {
    /// Jobs to run
    pub jobs: Vec<TocJob>,

    /// Configuration object
    pub config: Option<Config>,

    /// Path to configuration file
    pub config_file: Option<String>,

    /// Compute results without writing any destination
    pub dry_run: bool,
}

impl TocOptions {
    /// Create a new TocOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a job
    pub fn with_job(mut self, job: TocJob) -> Self {
        self.jobs.push(job);
        self
    }

    /// Add several jobs
    pub fn with_jobs(mut self, jobs: impl IntoIterator<Item = TocJob>) -> Self {
        self.jobs.extend(jobs);
        self
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Enable or disable dry-run mode
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
