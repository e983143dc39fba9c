//! Icon suggestion command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::icons::IconDb;

/// Suggest icon identifiers for a keyword
#[derive(Debug, Clone, Args)]
pub struct IconsArgs {
    /// Keyword or project description to resolve
    #[arg(short, long, value_name = "TEXT")]
    pub keyword: String,

    /// Pick from per-category alternate pools with this seed instead of the
    /// canonical list (omit the value to seed from the current time)
    #[arg(long, value_name = "SEED", num_args = 0..=1, default_missing_value = "now")]
    pub seed: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct IconsResult {
    keyword: String,
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    icons: Vec<String>,
}

impl IconsArgs {
    /// Execute the icons command
    pub fn execute(&self) -> CliResult<()> {
        let db =
            IconDb::load().map_err(|e| CliError::io(format!("Failed to load icon table: {e}")))?;

        let seed = match &self.seed {
            Some(raw) if raw == "now" => Some(chrono::Utc::now().timestamp_millis() as u64),
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                CliError::validation(format!("Invalid seed '{raw}'. Expected an integer"))
            })?),
            None => None,
        };

        let icons = match seed {
            Some(seed) => db.select_seeded(&self.keyword, seed),
            None => db.select(&self.keyword),
        };

        let result = IconsResult {
            keyword: self.keyword.clone(),
            category: db.resolve_category(&self.keyword).map(str::to_string),
            seed,
            icons: icons.to_vec(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Keyword:  {}", result.keyword);
            match &result.category {
                Some(category) => println!("Category: {category}"),
                None => println!("Category: (default)"),
            }
            if let Some(seed) = result.seed {
                println!("Seed:     {seed}");
            }
            println!("Icons:");
            for icon in &result.icons {
                println!("  {icon}");
            }
        }

        Ok(())
    }
}
