#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::{
    fs,
    path::{Path, PathBuf},
};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use battleship_replay::{init_logging, play_game, render_json, render_report};
#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use log::LevelFilter;

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum OutputFormat {
    Text,
    Json,
}

/// Replay a scripted two-player battleship match and write the result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Seven-line match script.
    #[arg(long)]
    input_file: PathBuf,
    /// File receiving the rendered boards, hit counts and verdict.
    #[arg(long)]
    output_file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(long, help = "Log level (overrides BATTLESHIP_LOG), e.g. --log-level debug")]
    log_level: Option<LevelFilter>,
}

#[cfg(feature = "std")]
fn read_script(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading match script {}", path.display()))?;
    Ok(raw.lines().map(|l| l.trim().to_string()).collect())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let lines = read_script(&cli.input_file)?;
    log::debug!("read {} lines from {}", lines.len(), cli.input_file.display());

    let result = play_game(&lines)
        .with_context(|| format!("playing match from {}", cli.input_file.display()))?;

    let report = match cli.format {
        OutputFormat::Text => render_report(&result),
        OutputFormat::Json => render_json(&result)?,
    };
    fs::write(&cli.output_file, report)
        .with_context(|| format!("writing result to {}", cli.output_file.display()))?;

    println!("{}", result.verdict);
    Ok(())
}
