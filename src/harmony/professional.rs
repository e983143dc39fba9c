//! Fixed 16-entry professional palettes.
//!
//! This is an independent palette policy from the harmony engine in the
//! parent module: instead of expanding one base color, it selects a curated
//! 16-color preset by keyword and optionally splices caller-supplied
//! "analyzed" colors (e.g. sampled from an uploaded logo) ahead of it. The
//! two policies serve different callers and stay separate.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::RgbColor;

/// Number of colors every professional palette carries.
pub const PALETTE_LEN: usize = 16;

/// Maximum number of analyzed colors spliced ahead of the preset.
pub const MAX_ANALYZED: usize = 8;

/// Analyzed colors darker than this mean channel brightness are rejected.
pub const MIN_BRIGHTNESS: f32 = 30.0;

/// Analyzed colors lighter than this mean channel brightness are rejected.
pub const MAX_BRIGHTNESS: f32 = 220.0;

/// One curated 16-color preset.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfessionalPreset {
    /// Keyword the preset is keyed on (e.g. "healthcare").
    pub name: String,
    /// Exactly 16 lowercase "#rrggbb" entries.
    pub colors: Vec<String>,
}

/// Database schema of professional_palettes.json.
#[derive(Debug, Deserialize)]
struct PresetTable {
    #[allow(dead_code)]
    version: String,
    default: String,
    palettes: Vec<ProfessionalPreset>,
}

/// Curated preset table with keyword selection and analyzed-color splicing.
#[derive(Debug, Clone)]
pub struct ProfessionalDb {
    presets: Vec<ProfessionalPreset>,
    default_name: String,
}

impl ProfessionalDb {
    /// Loads the preset table from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("professional_palettes.json");
        let table: PresetTable = serde_json::from_str(json_data)
            .context("Failed to parse embedded professional_palettes.json")?;

        anyhow::ensure!(
            table.palettes.iter().any(|p| p.name == table.default),
            "Default preset '{}' missing from professional palette table",
            table.default
        );
        for preset in &table.palettes {
            anyhow::ensure!(
                preset.colors.len() == PALETTE_LEN,
                "Preset '{}' carries {} colors, expected {PALETTE_LEN}",
                preset.name,
                preset.colors.len()
            );
        }

        Ok(Self {
            presets: table.palettes,
            default_name: table.default,
        })
    }

    /// All presets, in selection order.
    #[must_use]
    pub fn presets(&self) -> &[ProfessionalPreset] {
        &self.presets
    }

    /// Selects a preset by keyword.
    ///
    /// Same matching rules as the industry table: case-insensitive substring
    /// containment either direction, table order, first match wins, blank
    /// keywords go straight to the default preset ("corporate").
    #[must_use]
    pub fn select(&self, keyword: &str) -> &ProfessionalPreset {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() {
            if let Some(preset) = self
                .presets
                .iter()
                .find(|p| keyword.contains(&p.name) || p.name.contains(&keyword))
            {
                return preset;
            }
        }
        self.presets
            .iter()
            .find(|p| p.name == self.default_name)
            .expect("default preset validated at load time")
    }

    /// Composes a 16-color palette from a keyword plus optional analyzed
    /// colors.
    ///
    /// Analyzed colors with mean channel brightness strictly inside
    /// (30, 220) are kept, capped at 8, and placed ahead of the preset; the
    /// preset then pads the remainder, cycling if needed, and the result is
    /// truncated to exactly 16 entries.
    #[must_use]
    pub fn compose(&self, keyword: &str, analyzed: &[RgbColor]) -> Vec<String> {
        let preset = self.select(keyword);

        let mut colors: Vec<String> = analyzed
            .iter()
            .filter(|c| {
                let brightness = c.brightness();
                brightness > MIN_BRIGHTNESS && brightness < MAX_BRIGHTNESS
            })
            .take(MAX_ANALYZED)
            .map(RgbColor::to_hex)
            .collect();

        colors.extend(
            preset
                .colors
                .iter()
                .cycle()
                .take(PALETTE_LEN.saturating_sub(colors.len()))
                .cloned(),
        );
        colors.truncate(PALETTE_LEN);
        colors
    }
}
