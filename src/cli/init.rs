//! `mdtoc init` subcommand — initialize a new configuration file

use super::args::ConfigFormat;
use mdtoc::Config;

/// Default output path for a given format
pub(crate) fn default_output(format: ConfigFormat) -> &'static str {
    match format {
        ConfigFormat::Json => ".mdtoc.json",
        ConfigFormat::Yaml => ".mdtoc.yaml",
        ConfigFormat::Toml => ".mdtoc.toml",
    }
}

/// Serialize the default configuration in the requested format
pub(crate) fn render_default_config(format: ConfigFormat) -> anyhow::Result<String> {
    let config = Config::default();
    let content = match format {
        ConfigFormat::Json => format!("{}\n", serde_json::to_string_pretty(&config)?),
        ConfigFormat::Yaml => format!("# mdtoc configuration\n{}", serde_yaml_ng::to_string(&config)?),
        ConfigFormat::Toml => format!("# mdtoc configuration\n{}", toml::to_string(&config)?),
    };
    Ok(content)
}

/// Initialize a new configuration file
pub(crate) fn init_config(output: Option<&str>, format: ConfigFormat) -> anyhow::Result<()> {
    use colored::Colorize;
    use std::path::Path;

    let output_path = output.unwrap_or_else(|| default_output(format));

    if Path::new(output_path).exists() {
        eprintln!(
            "{} Configuration file '{}' already exists.",
            "Error:".red().bold(),
            output_path
        );
        eprintln!("Remove it first or choose a different output path with --output");
        std::process::exit(1);
    }

    std::fs::write(output_path, render_default_config(format)?)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green().bold(),
        output_path.cyan()
    );
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to change the marker, header or indentation", output_path.cyan());
    println!(
        "  2. Run: {} {} {} SOURCE DEST",
        "mdtoc".cyan(),
        "--config".yellow(),
        output_path.cyan()
    );

    Ok(())
}
