//! Deterministic color-harmony engine.
//!
//! Maps a free-text keyword to an industry color profile via an embedded
//! lookup table, then expands the profile's base color into a four-color
//! palette with its harmony rule. The table is embedded in the binary at
//! compile time and loaded on demand, like the icon tables.
//!
//! A second, independent palette policy (fixed 16-entry professional
//! presets) lives in [`professional`]; the two are deliberately not unified
//! because they serve different callers.

pub mod professional;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_PROFILE_HUE, DEFAULT_PROFILE_LIGHTNESS, DEFAULT_PROFILE_SATURATION,
};
use crate::models::{HarmonyRule, HslColor};

/// A static association between a business-domain keyword and a starting
/// color plus harmony rule.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryProfile {
    /// The keyword this profile is keyed on (e.g. "finance").
    pub keyword: String,
    /// Base color the harmony rule expands from.
    pub base: HslColor,
    /// Harmony rule applied to the base color.
    pub harmony: HarmonyRule,
}

impl IndustryProfile {
    /// The fallback profile returned when no table entry matches.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            keyword: "default".to_string(),
            base: HslColor::new(
                DEFAULT_PROFILE_HUE,
                DEFAULT_PROFILE_SATURATION,
                DEFAULT_PROFILE_LIGHTNESS,
            ),
            harmony: HarmonyRule::Triadic,
        }
    }
}

/// Record shape of entries in industries.json.
#[derive(Debug, Deserialize)]
struct ProfileRecord {
    keyword: String,
    hue: f32,
    saturation: f32,
    lightness: f32,
    harmony: HarmonyRule,
}

/// Database schema of industries.json.
#[derive(Debug, Deserialize)]
struct IndustryTable {
    #[allow(dead_code)]
    version: String,
    profiles: Vec<ProfileRecord>,
}

/// Industry profile table with ordered first-match keyword resolution.
///
/// Table order matters: resolution scans profiles in file order and the
/// first containment match wins, so broader keywords must come after the
/// more specific ones they would shadow.
#[derive(Debug, Clone)]
pub struct IndustryDb {
    profiles: Vec<IndustryProfile>,
}

impl IndustryDb {
    /// Loads the industry table from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("industries.json");
        let table: IndustryTable =
            serde_json::from_str(json_data).context("Failed to parse embedded industries.json")?;

        let profiles = table
            .profiles
            .into_iter()
            .map(|r| IndustryProfile {
                keyword: r.keyword,
                base: HslColor::new(r.hue, r.saturation, r.lightness),
                harmony: r.harmony,
            })
            .collect();

        Ok(Self { profiles })
    }

    /// All profiles, in resolution order.
    #[must_use]
    pub fn profiles(&self) -> &[IndustryProfile] {
        &self.profiles
    }

    /// Resolves a free-text keyword to an industry profile.
    ///
    /// Matching is case-insensitive substring containment in either
    /// direction, scanned in table order with first match winning. A blank
    /// keyword skips the scan entirely: `str::contains("")` is true for any
    /// haystack, which would otherwise hand every blank input to the first
    /// table entry instead of the fallback.
    ///
    /// This is a total function; unrecognized keywords get
    /// [`IndustryProfile::fallback`].
    #[must_use]
    pub fn resolve(&self, keyword: &str) -> IndustryProfile {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return IndustryProfile::fallback();
        }

        self.profiles
            .iter()
            .find(|p| keyword.contains(&p.keyword) || p.keyword.contains(&keyword))
            .cloned()
            .unwrap_or_else(IndustryProfile::fallback)
    }

    /// Generates the four-color palette for a keyword.
    ///
    /// Composition of [`Self::resolve`], [`HarmonyRule::expand`] and hex
    /// formatting. Deterministic: the same keyword always yields the same
    /// four lowercase hex strings.
    #[must_use]
    pub fn generate(&self, keyword: &str) -> Vec<String> {
        let profile = self.resolve(keyword);
        expand_to_hex(&profile, profile.harmony)
    }

    /// Generates a palette for a keyword with an explicit harmony rule,
    /// overriding the rule stored in the matched profile.
    #[must_use]
    pub fn generate_with_rule(&self, keyword: &str, rule: HarmonyRule) -> Vec<String> {
        let profile = self.resolve(keyword);
        expand_to_hex(&profile, rule)
    }
}

fn expand_to_hex(profile: &IndustryProfile, rule: HarmonyRule) -> Vec<String> {
    rule.expand(profile.base)
        .iter()
        .map(HslColor::to_hex)
        .collect()
}
