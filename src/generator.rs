//! Combined palette + icon generation.

use anyhow::Result;

use crate::harmony::IndustryDb;
use crate::icons::IconDb;
use crate::models::GeneratedPalette;

/// Holds the loaded lookup tables and produces complete generation results.
///
/// Both tables are embedded; constructing a `Generator` cannot touch the
/// filesystem or network. Results are computed fresh per call.
#[derive(Debug, Clone)]
pub struct Generator {
    industries: IndustryDb,
    icons: IconDb,
}

impl Generator {
    /// Loads both embedded tables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            industries: IndustryDb::load()?,
            icons: IconDb::load()?,
        })
    }

    /// Access to the industry table.
    #[must_use]
    pub fn industries(&self) -> &IndustryDb {
        &self.industries
    }

    /// Access to the icon table.
    #[must_use]
    pub fn icons(&self) -> &IconDb {
        &self.icons
    }

    /// Generates a named four-color palette plus canonical icons for a
    /// keyword. Deterministic.
    #[must_use]
    pub fn generate(&self, keyword: &str) -> GeneratedPalette {
        let profile = self.industries.resolve(keyword);
        GeneratedPalette::new(
            display_name(&profile.keyword),
            self.industries.generate(keyword),
            self.icons.select(keyword).to_vec(),
        )
    }

    /// Like [`Self::generate`], but picks icons from the seeded per-category
    /// pools instead of the canonical lists.
    #[must_use]
    pub fn generate_seeded(&self, keyword: &str, seed: u64) -> GeneratedPalette {
        let profile = self.industries.resolve(keyword);
        GeneratedPalette::new(
            display_name(&profile.keyword),
            self.industries.generate(keyword),
            self.icons.select_seeded(keyword, seed).to_vec(),
        )
    }
}

/// Title-cases a matched profile keyword for display ("real estate" ->
/// "Real Estate").
fn display_name(keyword: &str) -> String {
    keyword
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
