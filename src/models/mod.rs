//! Data models for colors, harmony rules and generation results.
//!
//! This module contains the core data structures used throughout the
//! application. Models are independent of the CLI and of the lookup tables
//! that drive generation.

pub mod harmony;
pub mod hsl;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use harmony::HarmonyRule;
pub use hsl::HslColor;
pub use palette::GeneratedPalette;
pub use rgb::RgbColor;
