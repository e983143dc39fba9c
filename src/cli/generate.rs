//! Combined generation command: palette plus icons.

use clap::Args;

use crate::cli::common::{CliError, CliResult};
use crate::generator::Generator;

/// Generate a named palette with matching icon suggestions
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Keyword or project description to resolve
    #[arg(short, long, value_name = "TEXT")]
    pub keyword: String,

    /// Pick icons from the seeded alternate pools with this seed
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let generator = Generator::load()
            .map_err(|e| CliError::io(format!("Failed to load generation tables: {e}")))?;

        let palette = match self.seed {
            Some(seed) => generator.generate_seeded(&self.keyword, seed),
            None => generator.generate(&self.keyword),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&palette)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Palette: {}", palette.name);
            println!("Colors:");
            for color in &palette.colors {
                println!("  {color}");
            }
            println!("Icons:");
            for icon in &palette.icons {
                println!("  {icon}");
            }
        }

        Ok(())
    }
}
