//! IconForge Library
//!
//! Deterministic brand palette and icon suggestion toolkit. Maps free-text
//! project keywords to color palettes (via an industry lookup table and
//! color-wheel harmony rules) and to icon identifier lists (via a category
//! dictionary), with export rendering for the results.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod generator;
pub mod harmony;
pub mod icons;
pub mod models;
