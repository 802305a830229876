//! Job runner: generate and insert TOCs for many files

use crate::config::Config;
use crate::insert::write_toc;
use crate::types::{Result, TocOptions, TocResults};
use rayon::prelude::*;

/// Run all jobs synchronously
///
/// Jobs are independent and run in parallel using rayon. A failing job
/// is recorded in the results and does not stop the others; only an
/// unusable configuration aborts the run.
pub fn generate_sync(options: &TocOptions) -> Result<TocResults> {
    let config = load_config(options)?;
    let mut results = TocResults::new();

    let outcomes: Vec<_> = options
        .jobs
        .par_iter()
        .map(|job| {
            let outcome = write_toc(&job.source, &job.dest, &config, options.dry_run);
            (job.dest.clone(), outcome)
        })
        .collect();

    for (dest, outcome) in outcomes {
        if let Err(e) = &outcome {
            log::warn!("{}: {}", dest, e);
        }
        results.add(dest, outcome);
    }

    Ok(results)
}

/// Run all jobs asynchronously
///
/// Each job runs on tokio's blocking pool since the work is file I/O plus
/// CPU-bound text processing.
#[cfg(feature = "async")]
pub async fn generate_async(options: &TocOptions) -> Result<TocResults> {
    use crate::types::TocError;
    use std::sync::Arc;

    let config = Arc::new(load_config(options)?);
    let dry_run = options.dry_run;
    let mut results = TocResults::new();

    let handles: Vec<_> = options
        .jobs
        .iter()
        .cloned()
        .map(|job| {
            let config = Arc::clone(&config);
            tokio::task::spawn_blocking(move || {
                let outcome = write_toc(&job.source, &job.dest, &config, dry_run);
                (job.dest, outcome)
            })
        })
        .collect();

    for handle in handles {
        let (dest, outcome) = handle
            .await
            .map_err(|e| TocError::AsyncRuntime(format!("Task join error: {}", e)))?;
        if let Err(e) = &outcome {
            log::warn!("{}: {}", dest, e);
        }
        results.add(dest, outcome);
    }

    Ok(results)
}

/// Load configuration from options
fn load_config(options: &TocOptions) -> Result<Config> {
    let config = if let Some(config) = &options.config {
        config.clone()
    } else if let Some(config_file) = &options.config_file {
        Config::from_file(config_file)?
    } else {
        Config::default()
    };
    config.validate()?;
    Ok(config)
}
