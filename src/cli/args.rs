//! CLI argument definitions for mdtoc

use clap::Parser;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum ConfigFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Parser, Debug)]
#[command(name = "mdtoc")]
#[command(about = "Generate a Table of Contents for Markdown files", long_about = None)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Option<Command>,

    /// SOURCE and DEST markdown files (with --in-place: files or directories)
    pub(crate) files: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub(crate) config: Option<String>,

    /// Marker line to replace in the destination (default: **MD-TOC**)
    #[arg(long)]
    pub(crate) marker: Option<String>,

    /// Use each file as both source and destination
    #[arg(short, long)]
    pub(crate) in_place: bool,

    /// Glob patterns for files to skip with --in-place (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub(crate) ignore: Vec<String>,

    /// Print the updated destination instead of writing it
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Print only the generated TOC for SOURCE
    #[arg(short, long, conflicts_with_all = ["in_place", "dry_run"])]
    pub(crate) print: bool,

    /// List every occurrence of repeated headings instead of collapsing them
    #[arg(long)]
    pub(crate) keep_duplicates: bool,

    /// Disable colored output
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Verbose output with detailed information
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Quiet mode - only report failures
    #[arg(short, long, conflicts_with = "verbose")]
    pub(crate) quiet: bool,
}

#[derive(Parser, Debug)]
pub(crate) enum Command {
    /// Initialize a new configuration file
    Init {
        /// Output file path (default: .mdtoc.<format>)
        #[arg(long)]
        output: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: ConfigFormat,
    },
}
