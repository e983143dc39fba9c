//! Export rendering for generation results.
//!
//! Renders a [`GeneratedPalette`] into the formats the surrounding tooling
//! consumes: a JSON document with metadata, an SVG swatch sheet, and a
//! React-style snippet. All renderers are pure string builders.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::models::GeneratedPalette;

/// Width/height of one SVG swatch square, in pixels.
const SWATCH_SIZE: u32 = 96;

/// Vertical room under each swatch for its hex label.
const LABEL_HEIGHT: u32 = 24;

/// Export format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON document with palette and metadata.
    Json,
    /// SVG swatch sheet.
    Svg,
    /// React-style snippet.
    React,
}

impl ExportFormat {
    /// File extension for this format (no leading dot).
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Svg => "svg",
            Self::React => "jsx",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "svg" => Ok(Self::Svg),
            "react" | "jsx" => Ok(Self::React),
            other => anyhow::bail!("Unknown export format '{other}'. Expected json, svg or react"),
        }
    }
}

/// JSON export envelope.
#[derive(Debug, Serialize)]
struct JsonExport<'a> {
    tool: &'static str,
    version: &'static str,
    generated_at: String,
    #[serde(flatten)]
    palette: &'a GeneratedPalette,
}

/// Renders a palette in the requested format.
///
/// `deterministic` pins the JSON timestamp to the epoch so golden tests can
/// compare output byte-for-byte; SVG and React output carry no timestamp and
/// ignore the flag.
pub fn render(
    palette: &GeneratedPalette,
    format: ExportFormat,
    deterministic: bool,
) -> Result<String> {
    match format {
        ExportFormat::Json => to_json(palette, deterministic),
        ExportFormat::Svg => Ok(to_svg(palette)),
        ExportFormat::React => Ok(to_react(palette)),
    }
}

/// Renders the palette as a pretty-printed JSON document.
pub fn to_json(palette: &GeneratedPalette, deterministic: bool) -> Result<String> {
    let generated_at = if deterministic {
        "1970-01-01T00:00:00Z".to_string()
    } else {
        Utc::now().to_rfc3339()
    };

    let export = JsonExport {
        tool: crate::constants::APP_BINARY_NAME,
        version: env!("CARGO_PKG_VERSION"),
        generated_at,
        palette,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// Renders the palette as an SVG swatch sheet, one labeled square per color.
#[must_use]
pub fn to_svg(palette: &GeneratedPalette) -> String {
    let count = palette.colors.len() as u32;
    let width = count.max(1) * SWATCH_SIZE;
    let height = SWATCH_SIZE + LABEL_HEIGHT;

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n  <title>{}</title>\n",
        palette.name
    );

    for (i, color) in palette.colors.iter().enumerate() {
        let x = i as u32 * SWATCH_SIZE;
        svg.push_str(&format!(
            "  <rect x=\"{x}\" y=\"0\" width=\"{SWATCH_SIZE}\" height=\"{SWATCH_SIZE}\" fill=\"{color}\"/>\n"
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"12\" \
             text-anchor=\"middle\">{color}</text>\n",
            x + SWATCH_SIZE / 2,
            SWATCH_SIZE + 16
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Renders the palette as a React-style snippet: a palette constant plus the
/// suggested icon names.
#[must_use]
pub fn to_react(palette: &GeneratedPalette) -> String {
    let mut out = format!("// {} palette, generated by IconForge\n", palette.name);
    out.push_str("export const palette = {\n");
    out.push_str(&format!("  name: \"{}\",\n", palette.name));
    out.push_str("  colors: [\n");
    for color in &palette.colors {
        out.push_str(&format!("    \"{color}\",\n"));
    }
    out.push_str("  ],\n");
    out.push_str("  icons: [\n");
    for icon in &palette.icons {
        out.push_str(&format!("    \"{icon}\",\n"));
    }
    out.push_str("  ],\n");
    out.push_str("};\n\nexport default palette;\n");
    out
}
