//! Export command: write a generation result to a file.

use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::{self, ExportFormat};
use crate::generator::Generator;

/// Export a generated palette as JSON, SVG or a React snippet
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Keyword or project description to resolve
    #[arg(short, long, value_name = "TEXT")]
    pub keyword: String,

    /// Export format: json, svg or react (defaults to the configured format)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Output path (defaults to [profile]_palette.[ext] in the configured
    /// export directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pick icons from the seeded alternate pools with this seed
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Use stable timestamps for deterministic output (for testing)
    #[arg(long)]
    pub deterministic: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();

        let format = self
            .format
            .as_deref()
            .unwrap_or(&config.export.default_format)
            .parse::<ExportFormat>()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let generator = Generator::load()
            .map_err(|e| CliError::io(format!("Failed to load generation tables: {e}")))?;

        let palette = match self.seed {
            Some(seed) => generator.generate_seeded(&self.keyword, seed),
            None => generator.generate(&self.keyword),
        };

        let contents = export::render(&palette, format, self.deterministic)
            .map_err(|e| CliError::io(format!("Failed to render export: {e}")))?;

        let output_path = self.output_path(&config, format, &palette.name);

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CliError::io(format!(
                        "Failed to create output directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        fs::write(&output_path, contents).map_err(|e| {
            CliError::io(format!(
                "Failed to write output file {}: {e}",
                output_path.display()
            ))
        })?;

        println!("✓ Exported {} palette to: {}", palette.name, output_path.display());

        Ok(())
    }

    /// Output file path: either user-specified or derived from the palette
    /// name and format in the configured export directory.
    fn output_path(&self, config: &Config, format: ExportFormat, name: &str) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        let stem = name.to_lowercase().replace(' ', "_");
        config
            .export
            .output_dir
            .join(format!("{stem}_palette.{}", format.extension()))
    }
}
