//! Configuration management CLI commands.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::ExportFormat;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default export output directory
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Default export format (json, svg or react)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&config)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Export output dir: {}", config.export.output_dir.display());
            println!("Export format:     {}", config.export.default_format);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.output_dir.is_none() && self.format.is_none() {
            return Err(CliError::validation(
                "Nothing to set. Use --output-dir and/or --format",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(ref dir) = self.output_dir {
            config.export.output_dir.clone_from(dir);
        }

        if let Some(ref format) = self.format {
            // Validate before persisting
            format
                .parse::<ExportFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?;
            config.export.default_format = format.to_lowercase();
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("✓ Configuration saved");

        Ok(())
    }
}
