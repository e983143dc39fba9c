//! Color-wheel harmony rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::HslColor;

/// A harmony rule expands one base color into a fixed set of four related
/// colors based on color-wheel relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyRule {
    /// Lightness/saturation variations of a single hue.
    Monochromatic,
    /// Neighboring hues (±30°) plus a muted accent at +60°.
    Analogous,
    /// The base hue and its opposite, each with a softened variant.
    Complementary,
    /// Three hues 120° apart plus a muted variant of the base.
    Triadic,
}

impl HarmonyRule {
    /// Expands a base color into four colors according to this rule.
    ///
    /// Hue arithmetic wraps around the color wheel; saturation and lightness
    /// adjustments are clamped to the floors and ceilings listed per variant,
    /// so every produced component stays in range.
    #[must_use]
    pub fn expand(self, base: HslColor) -> [HslColor; 4] {
        let (s, l) = (base.saturation, base.lightness);
        match self {
            Self::Monochromatic => [
                base.with_sl((s - 30.0).max(20.0), (l + 20.0).min(85.0)),
                base,
                base.with_sl((s + 10.0).min(100.0), (l - 15.0).max(25.0)),
                base.with_sl((s + 20.0).min(100.0), (l - 30.0).max(15.0)),
            ],
            Self::Analogous => [
                base.rotated(-30.0),
                base,
                base.rotated(30.0),
                base.rotated(60.0)
                    .with_sl((s - 20.0).max(20.0), (l + 15.0).min(90.0)),
            ],
            Self::Complementary => [
                base,
                base.rotated(180.0),
                base.with_sl((s - 25.0).max(20.0), (l + 20.0).min(90.0)),
                base.rotated(180.0)
                    .with_sl((s - 25.0).max(20.0), (l + 20.0).min(90.0)),
            ],
            Self::Triadic => [
                base,
                base.rotated(120.0),
                base.rotated(240.0),
                base.with_sl((s - 40.0).max(20.0), (l + 25.0).min(90.0)),
            ],
        }
    }

    /// All rules, in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Monochromatic,
            Self::Analogous,
            Self::Complementary,
            Self::Triadic,
        ]
    }

    /// Lowercase name used in data files and CLI arguments.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
        }
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HarmonyRule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monochromatic" | "mono" => Ok(Self::Monochromatic),
            "analogous" => Ok(Self::Analogous),
            "complementary" => Ok(Self::Complementary),
            "triadic" => Ok(Self::Triadic),
            other => anyhow::bail!(
                "Unknown harmony rule '{other}'. \
                 Expected one of: monochromatic, analogous, complementary, triadic"
            ),
        }
    }
}
