//! Four-color harmony palette command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::harmony::IndustryDb;
use crate::models::HarmonyRule;

/// Generate a four-color harmony palette for a keyword
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Keyword or project description to resolve (e.g. "finance dashboard")
    #[arg(short, long, value_name = "TEXT")]
    pub keyword: String,

    /// Harmony rule override (monochromatic, analogous, complementary, triadic)
    #[arg(long, value_name = "RULE")]
    pub harmony: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PaletteResult {
    keyword: String,
    profile: String,
    harmony: String,
    colors: Vec<String>,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self) -> CliResult<()> {
        let db = IndustryDb::load()
            .map_err(|e| CliError::io(format!("Failed to load industry table: {e}")))?;

        let profile = db.resolve(&self.keyword);

        let rule = match &self.harmony {
            Some(raw) => raw
                .parse::<HarmonyRule>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => profile.harmony,
        };

        let colors = db.generate_with_rule(&self.keyword, rule);

        let result = PaletteResult {
            keyword: self.keyword.clone(),
            profile: profile.keyword,
            harmony: rule.name().to_string(),
            colors,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Keyword:  {}", result.keyword);
            println!("Profile:  {}", result.profile);
            println!("Harmony:  {}", result.harmony);
            println!("Colors:");
            for color in &result.colors {
                println!("  {color}");
            }
        }

        Ok(())
    }
}
