//! HSL color triple used as the working representation for harmony math.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// A color expressed as hue, saturation and lightness.
///
/// Hue is in degrees (0-360), saturation and lightness in percent (0-100).
/// Components are carried as `f32` so that RGB round-trips stay within one
/// unit per channel; constructors and adjustment helpers clamp back into
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees (0-360)
    pub hue: f32,
    /// Saturation in percent (0-100)
    pub saturation: f32,
    /// Lightness in percent (0-100)
    pub lightness: f32,
}

impl HslColor {
    /// Creates a new `HslColor`, normalizing hue into `[0, 360)` and clamping
    /// saturation and lightness into `[0, 100]`.
    #[must_use]
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// Returns the same color with the hue rotated by `degrees`.
    ///
    /// Negative rotations wrap around the color wheel; the result is always
    /// in `[0, 360)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconforge::models::HslColor;
    ///
    /// let base = HslColor::new(10.0, 50.0, 50.0);
    /// assert_eq!(base.rotated(-30.0).hue, 340.0);
    /// assert_eq!(base.rotated(360.0).hue, 10.0);
    /// ```
    #[must_use]
    pub fn rotated(&self, degrees: f32) -> Self {
        Self {
            hue: (self.hue + degrees).rem_euclid(360.0),
            ..*self
        }
    }

    /// Returns the same hue with replaced saturation and lightness, clamped
    /// into range.
    #[must_use]
    pub fn with_sl(&self, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: self.hue,
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// Converts to RGB using the standard HSL→RGB algorithm.
    ///
    /// Chroma is `(1 - |2l - 1|) * s`, the hue sector selects the primary
    /// channel mix, and the lightness offset `m = l - c/2` is added before
    /// rounding each channel to the nearest integer in `[0, 255]`.
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_rgb(&self) -> RgbColor {
        let h = self.hue.rem_euclid(360.0);
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        RgbColor {
            r: ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            g: ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            b: ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }

    /// Converts to a lowercase "#rrggbb" hex string.
    ///
    /// # Examples
    ///
    /// ```
    /// use iconforge::models::HslColor;
    ///
    /// assert_eq!(HslColor::new(0.0, 100.0, 50.0).to_hex(), "#ff0000");
    /// assert_eq!(HslColor::new(120.0, 100.0, 50.0).to_hex(), "#00ff00");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.0}, {:.0}%, {:.0}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
