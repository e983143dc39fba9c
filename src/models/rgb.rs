//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::HslColor;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Supports parsing from hex strings (#rrggbb) and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#rrggbb", "rrggbb", "#RRGGBB", "RRGGBB"
    ///
    /// # Examples
    ///
    /// ```
    /// use iconforge::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#ff0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (rrggbb)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// All palette output in this crate is lowercase hex; exports and the CLI
    /// rely on that.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconforge::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#ff0000");
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Mean channel brightness (0-255).
    ///
    /// Used to filter out near-black and near-white samples before splicing
    /// analyzed colors into a professional palette.
    #[must_use]
    pub fn brightness(&self) -> f32 {
        (f32::from(self.r) + f32::from(self.g) + f32::from(self.b)) / 3.0
    }

    /// Converts the RGB color to HSL (Hue, Saturation, Lightness) color space.
    ///
    /// Hue is 0-360 degrees (0 for grayscale), saturation and lightness are
    /// 0-100 percent.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconforge::models::RgbColor;
    ///
    /// let red = RgbColor::new(255, 0, 0);
    /// let hsl = red.to_hsl();
    /// assert!((hsl.hue - 0.0).abs() < 0.01);
    /// assert!((hsl.saturation - 100.0).abs() < 0.01);
    /// assert!((hsl.lightness - 50.0).abs() < 0.01);
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> HslColor {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        // Lightness is the midpoint of the channel range
        let l = (max + min) / 2.0;

        // Saturation
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };

        // Hue
        let h = if delta == 0.0 {
            0.0 // Grayscale, hue is undefined
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        // Normalize hue to 0-360 range
        let h = if h < 0.0 { h + 360.0 } else { h };

        HslColor::new(h, s * 100.0, l * 100.0)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#ff0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #ffffff  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#fff").is_err());
        assert!(RgbColor::from_hex("#fffffff").is_err());
        assert!(RgbColor::from_hex("gggggg").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
    }

    #[test]
    fn test_to_hex_lowercase() {
        let color = RgbColor::new(255, 0, 0);
        assert_eq!(color.to_hex(), "#ff0000");

        let color = RgbColor::new(0, 128, 255);
        assert_eq!(color.to_hex(), "#0080ff");

        let color = RgbColor::new(0, 0, 0);
        assert_eq!(color.to_hex(), "#000000");
    }

    #[test]
    fn test_hex_roundtrip() {
        let original = RgbColor::new(123, 45, 67);
        let hex = original.to_hex();
        let parsed = RgbColor::from_hex(&hex).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_brightness() {
        assert!((RgbColor::new(0, 0, 0).brightness() - 0.0).abs() < 0.01);
        assert!((RgbColor::new(255, 255, 255).brightness() - 255.0).abs() < 0.01);
        assert!((RgbColor::new(30, 60, 90).brightness() - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_hsl_primary_colors() {
        // Red
        let hsl = RgbColor::new(255, 0, 0).to_hsl();
        assert!((hsl.hue - 0.0).abs() < 0.01);
        assert!((hsl.saturation - 100.0).abs() < 0.01);
        assert!((hsl.lightness - 50.0).abs() < 0.01);

        // Green
        let hsl = RgbColor::new(0, 255, 0).to_hsl();
        assert!((hsl.hue - 120.0).abs() < 0.01);
        assert!((hsl.saturation - 100.0).abs() < 0.01);

        // Blue
        let hsl = RgbColor::new(0, 0, 255).to_hsl();
        assert!((hsl.hue - 240.0).abs() < 0.01);
        assert!((hsl.saturation - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_rgb_to_hsl_grayscale() {
        // Black
        let hsl = RgbColor::new(0, 0, 0).to_hsl();
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 0.0);
        assert_eq!(hsl.lightness, 0.0);

        // White
        let hsl = RgbColor::new(255, 255, 255).to_hsl();
        assert_eq!(hsl.hue, 0.0);
        assert_eq!(hsl.saturation, 0.0);
        assert!((hsl.lightness - 100.0).abs() < 0.01);

        // Gray
        let hsl = RgbColor::new(128, 128, 128).to_hsl();
        assert_eq!(hsl.saturation, 0.0);
        assert!((hsl.lightness - 50.2).abs() < 0.1); // 128/255 ≈ 50.2%
    }

    #[test]
    fn test_hsl_roundtrip_channels() {
        let colors = vec![
            RgbColor::new(255, 0, 0),    // Red
            RgbColor::new(0, 255, 0),    // Green
            RgbColor::new(0, 0, 255),    // Blue
            RgbColor::new(255, 255, 0),  // Yellow
            RgbColor::new(255, 0, 255),  // Magenta
            RgbColor::new(0, 255, 255),  // Cyan
            RgbColor::new(128, 64, 192), // Purple-ish
            RgbColor::new(200, 100, 50), // Orange-ish
        ];

        for color in colors {
            let converted = color.to_hsl().to_rgb();
            // Allow small rounding errors (±1 per channel)
            assert!(
                (i16::from(color.r) - i16::from(converted.r)).abs() <= 1,
                "Red channel mismatch: {} vs {}",
                color.r,
                converted.r
            );
            assert!(
                (i16::from(color.g) - i16::from(converted.g)).abs() <= 1,
                "Green channel mismatch: {} vs {}",
                color.g,
                converted.g
            );
            assert!(
                (i16::from(color.b) - i16::from(converted.b)).abs() <= 1,
                "Blue channel mismatch: {} vs {}",
                color.b,
                converted.b
            );
        }
    }
}
