//! Layer composition for the two icon variants.
//!
//! All geometry is expressed as fractions of the canvas size (the design
//! grid is 1024), so every shape scales consistently with `--size`. Layers
//! are painted in a fixed order — panel, glows, letter mark, coin,
//! decorations — and each blends over what came before.

use crate::draw::{
    apply_masked_vertical_gradient, draw_thick_line, fill_circle, fill_rounded_rect,
    gradient_circle, stroke_mask_arc, stroke_mask_line,
};
use crate::glyph::draw_centered_glyph;
use crate::theme::{Palette, Rgb};
use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{ColorType, GrayImage, ImageEncoder, Rgba, RgbaImage};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

// Letterform proportions on the 1024 design grid.
const LETTER_WIDTH: f32 = 340.0 / 1024.0;
const LETTER_HEIGHT: f32 = 480.0 / 1024.0;
const LETTER_STROKE: f32 = 72.0 / 1024.0;
const LETTER_LIFT: f32 = 10.0 / 1024.0;

// Coin accent, up-right of the letter.
const COIN_OFFSET_X: f32 = 180.0 / 1024.0;
const COIN_OFFSET_Y: f32 = -190.0 / 1024.0;
const COIN_RADIUS: f32 = 52.0 / 1024.0;
const COIN_HALO: f32 = 20.0 / 1024.0;

// Small decorative circle and underline, down-left.
const DECOR_OFFSET_X: f32 = -195.0 / 1024.0;
const DECOR_OFFSET_Y: f32 = 210.0 / 1024.0;
const DECOR_RADIUS: f32 = 28.0 / 1024.0;
const DECOR_HALO: f32 = 15.0 / 1024.0;

// Opaque-variant background panel.
const PANEL_MARGIN: f32 = 40.0 / 1024.0;
const PANEL_RADIUS: f32 = 180.0 / 1024.0;

// Foreground content drops slightly to sit in the adaptive-icon safe zone.
const FOREGROUND_DROP: f32 = 20.0 / 1024.0;

// Deep fade targets for the two ambient glows.
const PRIMARY_GLOW_FADE: Rgb = [40, 35, 100];
const SECONDARY_GLOW_FADE: Rgb = [0, 80, 100];

/// What to render and where to put it.
#[derive(Debug)]
pub struct RenderOptions {
    pub size: u32,
    pub output: PathBuf,
    pub palette: Palette,
    pub icon_only: bool,
    pub foreground_only: bool,
}

/// Render the requested variants and write them under `opts.output`.
pub fn generate_icons(opts: &RenderOptions) -> Result<()> {
    create_dir_all(&opts.output).context("Can't create output directory")?;

    if !opts.foreground_only {
        println!("Generating icon.png...");
        let icon = render_icon(opts.size, &opts.palette);
        save_png(&icon, &opts.output.join("icon.png"))?;
        println!("  ✓ Generated icon.png ({0}x{0})", opts.size);
    }

    if !opts.icon_only {
        println!("Generating icon_foreground.png...");
        let foreground = render_foreground(opts.size, &opts.palette);
        save_png(&foreground, &opts.output.join("icon_foreground.png"))?;
        println!("  ✓ Generated icon_foreground.png ({0}x{0})", opts.size);
    }

    Ok(())
}

/// Opaque variant: dark base, surface panel, ambient glows, then the shared
/// foreground layers.
pub fn render_icon(size: u32, palette: &Palette) -> RgbaImage {
    let [br, bg, bb] = palette.background;
    let mut img = RgbaImage::from_pixel(size, size, Rgba([br, bg, bb, 255]));
    let s = size as f32;
    let c = s / 2.0;

    let margin = s * PANEL_MARGIN;
    let [sr, sg, sb] = palette.surface;
    fill_rounded_rect(
        &mut img,
        margin,
        margin,
        s - margin,
        s - margin,
        s * PANEL_RADIUS,
        Rgba([sr, sg, sb, 80]),
    );

    // Purple ambient glow up-left of center, cyan counter-glow down-right.
    gradient_circle(
        &mut img,
        c - s * (50.0 / 1024.0),
        c - s * (80.0 / 1024.0),
        s * (350.0 / 1024.0),
        palette.primary,
        PRIMARY_GLOW_FADE,
        50,
    );
    gradient_circle(
        &mut img,
        c + s * (120.0 / 1024.0),
        c + s * (150.0 / 1024.0),
        s * (250.0 / 1024.0),
        palette.secondary,
        SECONDARY_GLOW_FADE,
        30,
    );

    draw_letter_mark(&mut img, palette, 0.0);
    draw_coin_accent(&mut img, palette, 0.0);
    draw_decorations(&mut img, palette, 0.0);
    img
}

/// Transparent variant: no panel, no glows, content shifted down into the
/// adaptive-icon safe zone. Corners stay fully transparent.
pub fn render_foreground(size: u32, palette: &Palette) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let drop = size as f32 * FOREGROUND_DROP;

    draw_letter_mark(&mut img, palette, drop);
    draw_coin_accent(&mut img, palette, drop);
    draw_decorations(&mut img, palette, drop);
    img
}

/// The stylized "S": two arc bowls joined by a diagonal stroke.
///
/// The silhouette is built as a binary mask, then a full-width vertical
/// primary→secondary gradient is pushed through it, so the visible strokes
/// carry a smooth color run over the letter's height instead of a flat
/// fill.
pub fn draw_letter_mark(img: &mut RgbaImage, palette: &Palette, dy: f32) {
    let size = img.width();
    let s = size as f32;
    let w = s * LETTER_WIDTH;
    let h = s * LETTER_HEIGHT;
    let stroke = s * LETTER_STROKE;
    let sx = (s - w) / 2.0;
    let sy = (s - h) / 2.0 - s * LETTER_LIFT + dy;
    let half = h / 2.0;
    // Quarter-height radius steering the joining stroke's endpoints.
    let r = half / 2.0;

    let mut mask = GrayImage::new(size, size);
    // Top bowl, open to the left; runs 45° past the bottom of its box so it
    // hooks into the joining stroke.
    stroke_mask_arc(&mut mask, sx, sy, sx + w, sy + half, 180.0, 405.0, stroke);
    stroke_mask_line(
        &mut mask,
        sx + w / 2.0 + r / 2.0,
        sy + half / 2.0 + r / 3.0,
        sx + w / 2.0 - r / 2.0,
        sy + half + r / 2.0 - r / 3.0,
        stroke,
    );
    // Bottom bowl, open to the right.
    stroke_mask_arc(&mut mask, sx, sy + half, sx + w, sy + h, 0.0, 225.0, stroke);

    apply_masked_vertical_gradient(img, &mask, sy, h, palette.primary, palette.secondary);
}

/// Cyan coin with a soft halo and a centered € glyph.
pub fn draw_coin_accent(img: &mut RgbaImage, palette: &Palette, dy: f32) {
    let s = img.width() as f32;
    let cx = s / 2.0 + s * COIN_OFFSET_X;
    let cy = s / 2.0 + s * COIN_OFFSET_Y + dy;
    let radius = s * COIN_RADIUS;
    let [cr, cg, cb] = palette.secondary;

    // Halo rings, outermost (faintest) first so inner rings stack over.
    let steps = ((s * COIN_HALO).round() as i32).max(1);
    for i in (1..=steps).rev() {
        let alpha = (30.0 * (1.0 - i as f32 / steps as f32)) as u8;
        fill_circle(img, cx, cy, radius + i as f32, Rgba([cr, cg, cb, alpha]));
    }
    fill_circle(img, cx, cy, radius, Rgba([cr, cg, cb, 240]));

    let [br, bg, bb] = palette.background;
    draw_centered_glyph(img, '€', cx, cy, radius, Rgba([br, bg, bb, 255]));
}

/// Small primary-colored circle with its own halo, plus a thin underline.
pub fn draw_decorations(img: &mut RgbaImage, palette: &Palette, dy: f32) {
    let s = img.width() as f32;
    let cx = s / 2.0 + s * DECOR_OFFSET_X;
    let cy = s / 2.0 + s * DECOR_OFFSET_Y + dy;
    let radius = s * DECOR_RADIUS;
    let [pr, pg, pb] = palette.primary;

    let steps = ((s * DECOR_HALO).round() as i32).max(1);
    for i in (1..=steps).rev() {
        let alpha = (25.0 * (1.0 - i as f32 / steps as f32)) as u8;
        fill_circle(img, cx, cy, radius + i as f32, Rgba([pr, pg, pb, alpha]));
    }
    fill_circle(img, cx, cy, radius, Rgba([pr, pg, pb, 200]));

    let line_y = s / 2.0 + s * (260.0 / 1024.0) + dy;
    draw_thick_line(
        img,
        s / 2.0 - s * (220.0 / 1024.0),
        line_y,
        s / 2.0 - s * (140.0 / 1024.0),
        line_y,
        (s * (3.0 / 1024.0)).max(1.0),
        Rgba([pr, pg, pb, 60]),
    );
}

/// Encode as PNG with best compression and adaptive filtering.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut out, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    out.flush()?;
    Ok(())
}
