//! Brand palette and color math.
//!
//! The palette is kept as CSS color strings in JSON so that a user-supplied
//! `--palette` file and the embedded default share one schema.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// An 8-bit RGB triple.
pub type Rgb = [u8; 3];

/// Default Spendly brand colors, same shape as a `--palette` file.
const DEFAULT_PALETTE_JSON: &str = r##"
{
  "primary": "#6C63FF",
  "secondary": "#00D9FF",
  "background": "#0D0D0D",
  "surface": "#1A1A2E"
}
"##;

#[derive(Debug, Deserialize)]
struct PaletteFile {
    primary: String,
    secondary: String,
    background: String,
    surface: String,
}

/// Resolved brand palette used by every drawing layer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Purple — letter-mark top, decorative circle, ambient glow.
    pub primary: Rgb,
    /// Cyan — letter-mark bottom, coin fill, counter-glow.
    pub secondary: Rgb,
    /// Near-black base of the opaque icon; also the coin glyph color.
    pub background: Rgb,
    /// Slightly lighter panel tint behind the letter mark.
    pub surface: Rgb,
}

impl Palette {
    /// The built-in Spendly palette.
    pub fn default_brand() -> Self {
        // Embedded JSON is a compile-time constant; parsing cannot fail.
        Self::from_json(DEFAULT_PALETTE_JSON).unwrap()
    }

    /// Load a palette override from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette file {}", path.display()))?;
        Self::from_json(&data)
            .with_context(|| format!("Invalid palette file {}", path.display()))
    }

    fn from_json(json: &str) -> Result<Self> {
        let file: PaletteFile = serde_json::from_str(json).context("Invalid palette JSON")?;
        Ok(Palette {
            primary: parse_css_color(&file.primary)?,
            secondary: parse_css_color(&file.secondary)?,
            background: parse_css_color(&file.background)?,
            surface: parse_css_color(&file.surface)?,
        })
    }
}

/// Parse a CSS color string (`#6C63FF`, `rgb(…)`, named colors) into RGB.
pub fn parse_css_color(value: &str) -> Result<Rgb> {
    let srgb = css_color::Srgb::from_str(value)
        .map_err(|_| anyhow::anyhow!("Invalid CSS color: {value}"))?;
    Ok([
        (srgb.red * 255.) as u8,
        (srgb.green * 255.) as u8,
        (srgb.blue * 255.) as u8,
    ])
}

/// Componentwise linear interpolation between two colors, truncated to
/// integer channels.
///
/// `t` is not clamped: every call site passes values in `[0, 1]`, and an
/// out-of-range `t` extrapolates along the same line (the saturating float
/// cast still keeps channels in `0..=255`).
pub fn lerp_color(c1: Rgb, c2: Rgb, t: f32) -> Rgb {
    [
        lerp_channel(c1[0], c2[0], t),
        lerp_channel(c1[1], c2[1], t),
        lerp_channel(c1[2], c2[2], t),
    ]
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t) as u8
}
