//! IconForge - Deterministic brand palette and icon suggestion toolkit
//!
//! Resolves free-text project keywords to color palettes and icon
//! suggestions, and exports the results as JSON, SVG or React snippets.

use clap::{Parser, Subcommand};

use iconforge::cli::{
    CliResult, ConfigArgs, ExportArgs, GenerateArgs, IconsArgs, PaletteArgs, ProfessionalArgs,
};

/// IconForge - Deterministic brand palette and icon suggestion toolkit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a four-color harmony palette for a keyword
    Palette(PaletteArgs),
    /// Compose a 16-color professional palette for a keyword
    Professional(ProfessionalArgs),
    /// Suggest icon identifiers for a keyword
    Icons(IconsArgs),
    /// Generate a named palette with matching icon suggestions
    Generate(GenerateArgs),
    /// Export a generated palette as JSON, SVG or a React snippet
    Export(ExportArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result: CliResult<()> = match cli.command {
        Commands::Palette(args) => args.execute(),
        Commands::Professional(args) => args.execute(),
        Commands::Icons(args) => args.execute(),
        Commands::Generate(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
