//! Sixteen-color professional palette command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::harmony::professional::ProfessionalDb;
use crate::models::RgbColor;

/// Compose a 16-color professional palette for a keyword
#[derive(Debug, Clone, Args)]
pub struct ProfessionalArgs {
    /// Keyword or filename to select a preset for (e.g. "healthcare-logo.png")
    #[arg(short, long, value_name = "TEXT")]
    pub keyword: String,

    /// Analyzed colors to splice ahead of the preset, comma-separated hex
    /// (e.g. "#8040c0,#2db7d2")
    #[arg(long, value_name = "HEX,HEX,...")]
    pub colors: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ProfessionalResult {
    keyword: String,
    preset: String,
    colors: Vec<String>,
}

impl ProfessionalArgs {
    /// Execute the professional palette command
    pub fn execute(&self) -> CliResult<()> {
        let db = ProfessionalDb::load()
            .map_err(|e| CliError::io(format!("Failed to load preset table: {e}")))?;

        let analyzed = match &self.colors {
            Some(raw) => parse_color_list(raw)?,
            None => Vec::new(),
        };

        let result = ProfessionalResult {
            keyword: self.keyword.clone(),
            preset: db.select(&self.keyword).name.clone(),
            colors: db.compose(&self.keyword, &analyzed),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Keyword: {}", result.keyword);
            println!("Preset:  {}", result.preset);
            println!("Colors:");
            for color in &result.colors {
                println!("  {color}");
            }
        }

        Ok(())
    }
}

/// Parses a comma-separated hex color list.
fn parse_color_list(raw: &str) -> CliResult<Vec<RgbColor>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            RgbColor::from_hex(s).map_err(|e| CliError::validation(format!("Invalid color: {e}")))
        })
        .collect()
}
