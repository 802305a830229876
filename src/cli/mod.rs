//! CLI entry point — module declarations and the `run()` dispatcher

mod args;
mod files;
mod init;

use anyhow::Context;
use args::{Args, Command};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use files::{expand_paths, filter_ignored, skip_unmarked};
use mdtoc::{
    Config, DuplicatePolicy, TocError, TocJob, TocOptions, TocResults, generate_sync, generate_toc,
    helpers::is_markdown_path,
};

/// Main CLI entry point — parse args and dispatch to the appropriate handler
pub fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    // Handle init subcommand
    if let Some(Command::Init { output, format }) = &args.command {
        return init::init_config(output.as_deref(), *format);
    }

    let config = build_config(&args)?;

    if args.print {
        return print_toc(&args, &config);
    }

    let jobs = if args.in_place {
        let files = expand_paths(&args.files);
        let files = filter_ignored(files, &args.ignore).context("invalid --ignore pattern")?;
        let files = skip_unmarked(files, &config.marker);
        if files.is_empty() {
            if !args.quiet {
                println!("No files to process.");
            }
            return Ok(());
        }
        files.into_iter().map(|f| TocJob::in_place(f.path)).collect()
    } else {
        match args.files.as_slice() {
            [source, dest] => vec![TocJob::new(source, dest)],
            _ => Args::command()
                .error(
                    clap::error::ErrorKind::WrongNumberOfValues,
                    "expected exactly SOURCE and DEST (or use --in-place)",
                )
                .exit(),
        }
    };

    let options = TocOptions::new()
        .with_jobs(jobs)
        .with_config(config)
        .with_dry_run(args.dry_run);

    let results = generate_sync(&options)?;
    report(&args, &results);

    if results.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}

/// Resolve configuration: explicit file, then discovery, then defaults; flags override
fn build_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = if let Some(ref config_path) = args.config {
        Config::from_file(config_path)
            .with_context(|| format!("failed to load config '{}'", config_path))?
    } else {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        Config::discover(cwd).unwrap_or_default()
    };

    if let Some(ref marker) = args.marker {
        config.marker = marker.clone();
    }
    if args.keep_duplicates {
        config.duplicates = DuplicatePolicy::Keep;
    }
    config.validate()?;
    Ok(config)
}

/// `--print`: write the TOC for a single source to stdout
fn print_toc(args: &Args, config: &Config) -> anyhow::Result<()> {
    let [source] = args.files.as_slice() else {
        Args::command()
            .error(
                clap::error::ErrorKind::WrongNumberOfValues,
                "--print expects exactly one SOURCE",
            )
            .exit()
    };

    if !is_markdown_path(source) {
        let error = TocError::InvalidExtension(source.clone());
        eprintln!("{} {}: {}", "Error:".red().bold(), source, error);
        std::process::exit(1);
    }

    match std::fs::read_to_string(source) {
        Ok(markdown) => {
            print!("{}", generate_toc(&markdown, config));
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}: {}", "Error:".red().bold(), source, e);
            std::process::exit(1);
        }
    }
}

/// Print per-destination outcomes and failures
fn report(args: &Args, results: &TocResults) {
    let multiple = results.results.len() > 1;

    for outcome in results.successes() {
        if args.dry_run {
            if multiple {
                println!("{} {}", "==>".cyan().bold(), outcome.dest);
            }
            print!("{}", outcome.content);
        } else if !args.quiet {
            println!(
                "{} {} ({} entries)",
                "✓".green().bold(),
                outcome.dest,
                outcome.entries
            );
        }
    }

    for (dest, error) in results.failures() {
        eprintln!("{} {}: {}", "Error:".red().bold(), dest, error);
    }

    if args.verbose && !args.dry_run {
        let written = results.successes().filter(|o| o.written).count();
        println!(
            "\nSummary: {} file(s) updated, {} failed",
            written,
            results.failure_count()
        );
    }
}
