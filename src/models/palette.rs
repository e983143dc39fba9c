//! Generated palette result type.

use serde::{Deserialize, Serialize};

/// A single generation result: a named set of hex colors plus the icon
/// identifiers suggested for the same keyword.
///
/// Palettes are computed fresh on every request and carry no identity beyond
/// their contents; saving or diffing them is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPalette {
    /// Display name, derived from the matched industry keyword.
    pub name: String,
    /// Lowercase "#rrggbb" hex colors (4 for harmony palettes, 16 for
    /// professional palettes).
    pub colors: Vec<String>,
    /// Icon identifiers from the closed icon vocabulary.
    pub icons: Vec<String>,
}

impl GeneratedPalette {
    /// Creates a new palette result.
    #[must_use]
    pub fn new(name: impl Into<String>, colors: Vec<String>, icons: Vec<String>) -> Self {
        Self {
            name: name.into(),
            colors,
            icons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_json() {
        let palette = GeneratedPalette::new(
            "Finance",
            vec!["#2db7d2".to_string()],
            vec!["dollar-sign".to_string()],
        );
        let json = serde_json::to_string(&palette).unwrap();
        assert!(json.contains("\"name\":\"Finance\""));
        assert!(json.contains("#2db7d2"));

        let back: GeneratedPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }
}
