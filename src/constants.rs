//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fallback color profile.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "IconForge";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "iconforge";

/// Hue of the fallback industry profile (a violet-leaning "tech" tone).
pub const DEFAULT_PROFILE_HUE: f32 = 260.0;

/// Saturation of the fallback industry profile, in percent.
pub const DEFAULT_PROFILE_SATURATION: f32 = 75.0;

/// Lightness of the fallback industry profile, in percent.
pub const DEFAULT_PROFILE_LIGHTNESS: f32 = 60.0;
