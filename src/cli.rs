use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ExportFormat {
    Csv,
    Jsonl,
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliOptions {
    /// Path to the browser history database (Chromium `History` or Firefox
    /// `places.sqlite`)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file for the exported records
    #[arg(short, long, default_value = "browser_history_export.csv")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Compute SHA-256 of the source artifact before copying it
    #[arg(long)]
    pub artifact_sha256: bool,
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
