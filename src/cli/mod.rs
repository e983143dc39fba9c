//! CLI command handlers for IconForge.
//!
//! This module provides headless, scriptable access to the generation
//! engines for automation, testing, and CI/CD integration.

pub mod common;
pub mod config;
pub mod export;
pub mod generate;
pub mod icons;
pub mod palette;
pub mod professional;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use generate::GenerateArgs;
pub use icons::IconsArgs;
pub use palette::PaletteArgs;
pub use professional::ProfessionalArgs;
